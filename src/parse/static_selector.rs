/// Declares a static CSS `Selector` parsed lazily on first use. The selector
/// literals are fixed at compile time, so a parse failure is a programmer
/// error and panics at the first deref.
#[macro_export]
macro_rules! static_selector {
    ($name: ident <- $sel: literal) => {
        static $name: ::std::sync::LazyLock<::scraper::Selector> =
            ::std::sync::LazyLock::new(|| match ::scraper::Selector::parse($sel) {
                Ok(sel) => sel,
                Err(e) => panic!("Error parsing static selector {}: {:?}", $sel, e),
            });
    };
}
