//! Comparators.
//!
//! `FieldComparator` orders entities by one field. `CombinedComparator`
//! chains them lexicographically, keeps an explicit chain-level reversal
//! flag, and stays introspectable so the chain can be read back as an
//! `OrderSpec`.

mod combined;
mod field;
mod link;
mod policy;
mod sort;


// re-exports
pub use combined::CombinedComparator;
pub use field::{
    ByteFieldComparator, CharFieldComparator, DoubleFieldComparator, FieldComparator,
    FloatFieldComparator, IntFieldComparator, LongFieldComparator, PrimitiveComparator,
    ReferenceComparator, ShortFieldComparator,
};
pub use link::{Link, OpaqueComparator, OpaqueReason};
pub use policy::ChainPolicy;
