pub mod page;
pub mod seo;
