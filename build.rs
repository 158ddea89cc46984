fn main() {
    // Emit ESP-IDF link arguments only for firmware builds; host test
    // builds (--no-default-features) have nothing to link against.
    if std::env::var("CARGO_FEATURE_ESPIDF").is_ok() {
        embuild::espidf::sysenv::output();
    }
}
