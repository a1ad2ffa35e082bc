pub mod inspect;
#[cfg(test)]
pub mod test;
pub mod text;
