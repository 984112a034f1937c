mod dto;
mod serial;

pub(crate) use dto::impl_dto;
pub(crate) use serial::impl_serial;
