use afl::fuzz;
use pt_identification::{
    citizen_card_number, id_card_number, tax_number, Country, DocumentType, IdCardScore,
    ValidationError, ValidatorConfig,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let i = input.iter().position(|b| *b == b',')?;
    Some((&input[0..i], &input[i + 1..]))
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_document(rng: &mut StdRng) -> DocumentType {
    match rng.gen_range::<u8, _>(0..4) {
        0 => DocumentType::TaxNumber,
        1 => DocumentType::TaxNumberStrict,
        2 => DocumentType::IdCardNumber,
        _ => DocumentType::CitizenCardNumber,
    }
}

fn gen_country(rng: &mut StdRng) -> Country {
    if rng.gen_bool(0.8) {
        Country::PT
    } else {
        Country::BR
    }
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let document = gen_document(&mut rng);
    let country = gen_country(&mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Document: {:?}, country: {:?}", document, country);
    }

    // the score only grows while stages pass
    let score = id_card_number::score(input);
    if score >= IdCardScore::NotNumeric {
        assert!(!input.is_empty());
    }
    if score >= IdCardScore::WrongLength {
        assert!(input.chars().all(|c| c.is_ascii_digit()));
    }
    assert_eq!(id_card_number::is_valid(input), score.is_success());
    assert_eq!(tax_number::is_valid(input), id_card_number::is_valid(input));
    if tax_number::is_valid_strict(input) {
        assert!(tax_number::is_valid(input));
    }

    match citizen_card_number::is_valid(input) {
        Ok(_) => assert_eq!(input.chars().count(), 12),
        Err(ValidationError::UnsupportedJurisdiction(_)) => {
            panic!("citizen cards are not dispatched by country")
        }
        Err(_) => {}
    }

    match ValidatorConfig::new(document).country(country).build() {
        Ok(validator) => {
            assert_eq!(country, Country::PT);
            if let Err(err) = validator.validate(input) {
                assert_eq!(document, DocumentType::CitizenCardNumber);
                assert!(!err.is_unsupported());
            }
        }
        Err(err) => {
            assert_ne!(country, Country::PT);
            assert!(err.is_unsupported());
        }
    }
}
