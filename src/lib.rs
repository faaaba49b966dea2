// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod country;
mod error;
mod identification;
mod observability;
mod validator;

// This is the public API of the library
pub use country::{dispatch, Country};
pub use error::{CountryParseError, InvalidScoreError, ValidationError, NOT_IMPLEMENTED_MESSAGE};
pub use identification::{
    citizen_card_number, id_card_number, tax_number, CitizenCardChecksum, IdCardNumberChecksum,
    IdCardScore, StrictTaxNumberChecksum, TaxNumberChecksum, Validator,
};
pub use observability::labels::Labels;
pub use validator::{
    config::{DocumentType, ValidatorConfig},
    DocumentValidator,
};
