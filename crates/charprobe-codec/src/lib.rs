//! Multi-byte encoding probers and the tables they run on.

pub mod context_table;
pub mod family;
pub mod group;
pub mod mbcs;
pub mod models;
pub mod profiles;
pub mod utf8;

pub use family::MbcsFamily;
pub use group::MbcsGroupProber;
pub use mbcs::MultiByteCharSetProber;
pub use utf8::Utf8Prober;
