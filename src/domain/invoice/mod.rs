pub mod entities;
pub mod value_objects;

pub use entities::{DocumentTotals, DocumentUpdate, InvoiceDocument, LineItem, LogoImage};
pub use value_objects::{ColorTheme, Currency, ValueObjectError, parse_or_zero};
