pub mod inspect;
pub mod intermediate;
pub mod loader;
pub mod opaque;

#[cfg(test)]
mod test_fixtures;
