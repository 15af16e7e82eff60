pub mod mcq_view;
pub mod request;
pub mod response;
