use criterion::{criterion_group, criterion_main};

mod validation_benchmark {
    use criterion::Criterion;
    use fi_business_id::{
        compute_check_digit, normalize, FinnishBusinessIdChecksum, Validator, ValidatorRegistry,
    };

    fn sample_business_ids() -> Vec<String> {
        let mut business_ids = vec![];
        for i in 0..1000u32 {
            let prefix = format!("{:07}", i * 7_919);
            if let Some(check_digit) = compute_check_digit(&prefix) {
                business_ids.push(format!("{}-{}", prefix, check_digit));
                business_ids.push(format!("{}{}", prefix, check_digit));
            }
        }
        business_ids.push("123.456".to_string());
        business_ids.push("not a business id".to_string());
        business_ids
    }

    pub fn criterion_benchmark(c: &mut Criterion) {
        let business_ids = sample_business_ids();
        let registry = ValidatorRegistry::default();

        c.bench_function("normalize", |b| {
            b.iter(|| {
                let mut rewritten = 0;
                for business_id in &business_ids {
                    if normalize(business_id).len() != business_id.len() {
                        rewritten += 1;
                    }
                }
                rewritten
            })
        });

        c.bench_function("checksum", |b| {
            b.iter(|| {
                business_ids
                    .iter()
                    .filter(|business_id| FinnishBusinessIdChecksum.is_valid_match(business_id))
                    .count()
            })
        });

        c.bench_function("registry validate", |b| {
            b.iter(|| {
                let mut num_valid = 0;
                for business_id in &business_ids {
                    if registry.validate(Some("FI"), business_id).is_ok() {
                        num_valid += 1;
                    }
                }
                num_valid
            })
        });
    }
}

criterion_group!(benches, validation_benchmark::criterion_benchmark);
criterion_main!(benches);
