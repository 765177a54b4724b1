pub mod extract;
pub mod html;

#[cfg(test)]
mod tests;

pub use extract::{PageExtract, PageSelectors, extract_page};
