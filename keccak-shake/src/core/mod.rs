pub(crate) mod prp;
pub(crate) mod sponge;
pub(crate) mod variant;
