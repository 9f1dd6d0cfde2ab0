use afl::fuzz;
use fi_business_id::{
    detect_format, is_blank, is_valid_checksum, is_valid_format, normalize, validate_business_id,
    BusinessIdError, BusinessIdFormat, ValidatorRegistry,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(&ValidatorRegistry::default(), data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&ValidatorRegistry::default(), &input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(registry: &ValidatorRegistry, bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(registry, input_str, rng);

    Some(())
}

fn gen_country_code(rng: &mut StdRng) -> Option<&'static str> {
    match rng.gen_range::<u8, _>(0..4) {
        0 => None,
        1 => Some("FI"),
        2 => Some("fi"),
        _ => Some("SE"),
    }
}

fn run_fuzz(registry: &ValidatorRegistry, input: &str, mut rng: StdRng) {
    let country_code = gen_country_code(&mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Country code: {:?}", country_code);
    }

    let normalized = normalize(input);
    assert_eq!(normalize(&normalized), normalized);
    if normalized != input {
        assert_eq!(input.len(), 8);
        assert!(input.chars().all(|c| c.is_ascii_digit()));
    }

    let result = validate_business_id(input);
    match detect_format(input) {
        _ if is_blank(input) => assert_eq!(result, Ok(())),
        None => {
            assert!(!is_valid_format(input));
            assert!(matches!(result, Err(BusinessIdError::InvalidFormat { .. })));
        }
        Some(BusinessIdFormat::RegisteredAssociation) => assert_eq!(result, Ok(())),
        Some(BusinessIdFormat::Formal) => {
            assert_eq!(result.is_ok(), is_valid_checksum(input));
        }
    }

    let registry_result = registry.validate(country_code, input);
    #[cfg(feature = "manual_test")]
    {
        println!("Result: {:?}", registry_result);
    }
    match country_code {
        Some("FI") => assert_eq!(registry_result, result),
        _ => assert_eq!(registry_result, Ok(())),
    }
}
