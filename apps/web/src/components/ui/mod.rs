mod alert;
mod button;
mod page_header;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use page_header::PageHeader;
pub(crate) use spinner::Spinner;
