pub mod addon_request;
