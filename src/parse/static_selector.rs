use std::sync::OnceLock;

use scraper::Selector;

/// A css selector compiled on first use.
#[derive(Debug)]
pub(super) struct StaticSelector {
    compiled: OnceLock<Selector>,
    source: &'static str,
}

impl StaticSelector {
    pub(super) const fn new(source: &'static str) -> Self {
        Self {
            compiled: OnceLock::new(),
            source,
        }
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Selector {
        self.compiled.get_or_init(|| {
            Selector::parse(self.source)
                .unwrap_or_else(|e| panic!("static selector {:?} is invalid: {e:?}", self.source))
        })
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_selector_compiles_lazily() {
        static_selector!(LINK <- "tr > td a");
        let html = scraper::Html::parse_fragment("<table><tr><td><a>x</a></td></tr></table>");
        assert_eq!(html.select(&LINK).count(), 1);
        // second use goes through the cached selector
        assert_eq!(html.select(&LINK).count(), 1);
    }
}
