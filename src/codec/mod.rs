//! List Wire Codec
//!
//! Pure byte-level encoding for the follow registry:
//! - list operations sent to `applyListOp(slot, op)`
//! - storage location descriptors returned by `getListStorageLocation(tokenId)`
//!
//! No I/O and no state. Every offset is a named constant and every read is
//! bounds-checked before slicing.

pub mod errors;
pub mod location;
pub mod operation;

pub use errors::CodecError;
pub use location::{layout, ListStorageLocation};
pub use operation::{
    encode_add_record, pad_address, ListOpcode, ListOperation, OP_HEADER_LENGTH, OP_LENGTH,
};
