pub mod notifier;
pub mod sender;
pub mod settings;

#[cfg(test)]
pub(crate) mod test_support;
