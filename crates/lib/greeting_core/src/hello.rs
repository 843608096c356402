//! Hello world function.

/// The greeting returned by [`hello_world`].
pub const HELLO_WORLD: &str = "Hello world!";

/// Returns the fixed greeting `"Hello world!"`.
pub fn hello_world() -> &'static str {
    HELLO_WORLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world_returns_exact_greeting() {
        let expected = "Hello world!";
        let output = hello_world();
        assert_eq!(
            output, expected,
            "Got {output} when expecting {expected}"
        );
    }

    #[test]
    fn hello_world_has_no_trailing_whitespace() {
        let greeting = hello_world();
        assert_eq!(greeting.len(), 12);
        assert_eq!(greeting, greeting.trim_end());
    }

    #[test]
    fn hello_world_is_idempotent() {
        let first = hello_world();
        for _ in 0..100 {
            assert_eq!(hello_world(), first);
        }
    }

    #[test]
    fn hello_world_from_many_threads() {
        let results: Vec<&'static str> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(hello_world)).collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("thread panicked"))
                .collect()
        });

        assert_eq!(results.len(), 8);
        assert!(results.iter().all(|g| *g == HELLO_WORLD));
    }
}
