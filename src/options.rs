//! Cosmetic formatting options applied to already-encoded UUID strings.

use serde::{Deserialize, Serialize};

/// Post-generation formatting options.
///
/// Applied strictly after the byte-to-string conversion; the two transforms
/// commute and are idempotent. `count` is the batch size honored by
/// [`generate_many`](crate::generate_many) callers and has no effect inside a
/// single generation.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Uppercase the hexadecimal digits.
    pub uppercase: bool,
    /// Keep the canonical 8-4-4-4-12 hyphens; `false` strips them.
    pub with_hyphens: bool,
    /// Batch size hint carried alongside the cosmetic flags.
    pub count: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            uppercase: false,
            with_hyphens: true,
            count: 1,
        }
    }
}

impl GenerationOptions {
    /// Applies the cosmetic transforms to an already-valid UUID string.
    ///
    /// Pure and total; applying the same options twice is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::GenerationOptions;
    ///
    /// let opts = GenerationOptions {
    ///     uppercase: true,
    ///     with_hyphens: false,
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     opts.apply("017f22e2-79b0-7cc3-98c4-dc0c0c07398f"),
    ///     "017F22E279B07CC398C4DC0C0C07398F"
    /// );
    /// ```
    pub fn apply(&self, uuid: &str) -> String {
        let mut out = if self.uppercase {
            uuid.to_uppercase()
        } else {
            uuid.to_owned()
        };
        if !self.with_hyphens {
            out.retain(|c| c != '-');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::GenerationOptions;

    const CANONICAL: &str = "017f22e2-79b0-7cc3-98c4-dc0c0c07398f";

    /// Leaves the canonical form untouched by default
    #[test]
    fn leaves_the_canonical_form_untouched_by_default() {
        assert_eq!(GenerationOptions::default().apply(CANONICAL), CANONICAL);
    }

    /// Uppercases the whole string
    #[test]
    fn uppercases_the_whole_string() {
        let opts = GenerationOptions {
            uppercase: true,
            ..Default::default()
        };
        assert_eq!(
            opts.apply(CANONICAL),
            "017F22E2-79B0-7CC3-98C4-DC0C0C07398F"
        );
    }

    /// Strips every hyphen
    #[test]
    fn strips_every_hyphen() {
        let opts = GenerationOptions {
            with_hyphens: false,
            ..Default::default()
        };
        assert_eq!(opts.apply(CANONICAL), "017f22e279b07cc398c4dc0c0c07398f");
    }

    /// Applying twice equals applying once
    #[test]
    fn applying_twice_equals_applying_once() {
        let combos = [
            (false, true),
            (false, false),
            (true, true),
            (true, false),
        ];
        for (uppercase, with_hyphens) in combos {
            let opts = GenerationOptions {
                uppercase,
                with_hyphens,
                ..Default::default()
            };
            let once = opts.apply(CANONICAL);
            assert_eq!(opts.apply(&once), once);
        }
    }

    /// Transforms commute
    #[test]
    fn transforms_commute() {
        let upper_only = GenerationOptions {
            uppercase: true,
            ..Default::default()
        };
        let strip_only = GenerationOptions {
            with_hyphens: false,
            ..Default::default()
        };
        let both = GenerationOptions {
            uppercase: true,
            with_hyphens: false,
            ..Default::default()
        };
        assert_eq!(
            strip_only.apply(&upper_only.apply(CANONICAL)),
            both.apply(CANONICAL)
        );
        assert_eq!(
            upper_only.apply(&strip_only.apply(CANONICAL)),
            both.apply(CANONICAL)
        );
    }
}
