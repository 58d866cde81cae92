use std::borrow::Cow;

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

/// A single path segment of a request url.
///
/// Empty strings, the number `0`, and missing values are all rejected when
/// an url is built. A zero identifier is therefore never accepted, even where
/// the API would consider it valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A textual segment.
    Text(Cow<'a, str>),
    /// A numeric segment.
    Number(u64),
    /// An absent segment.
    Missing,
}

impl Segment<'_> {
    fn is_valid(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Number(number) => *number != 0,
            Self::Missing => false,
        }
    }
}

impl std::fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => text.fmt(f),
            Self::Number(number) => number.fmt(f),
            Self::Missing => "<missing>".fmt(f),
        }
    }
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Segment<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Segment<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

macro_rules! number_segment {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Segment<'_> {
                fn from(number: $ty) -> Self {
                    Self::Number(u64::from(number))
                }
            }
        )+
    };
}

number_segment!(u8, u16, u32, u64);

impl<'a, T> From<Option<T>> for Segment<'a>
where
    T: Into<Segment<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Builds an array of [`Segment`]s from a list of expressions.
///
/// ```
/// use particle_cloud::{path, url::Segment};
///
/// let segments = path!["devices", 42u32, None::<&str>];
/// assert_eq!(segments[1], Segment::Number(42));
/// assert_eq!(segments[2], Segment::Missing);
/// ```
#[macro_export]
macro_rules! path {
    ($($segment:expr),+ $(,)?) => {
        [$($crate::url::Segment::from($segment)),+]
    };
}

/// Composes `{base_url}/{segments}?access_token={token}`.
///
/// # Errors
///
/// - [`crate::error::ErrorKind::Configuration`] when the access token is
///   empty
/// - [`crate::error::ErrorKind::InvalidArgument`] when a segment is empty,
///   zero, or missing
pub fn build(config: &Config, segments: &[Segment<'_>]) -> Result<String> {
    if config.token().is_empty() {
        return Err(Error::configuration("Undefined token."));
    }

    if let Some(position) = segments.iter().position(|segment| !segment.is_valid()) {
        return Err(Error::invalid_argument(format!(
            "Undefined or invalid section in path at position {position}."
        )));
    }

    let path = segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/");

    let url = format!(
        "{}/{path}?access_token={}",
        config.base_url(),
        config.token()
    );

    if config.debug() {
        debug!("{url}");
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::io::{Result as IoResult, Write};
    use std::sync::{Arc, Mutex};

    use tracing::Level;

    use tracing_subscriber::util::SubscriberInitExt;

    use crate::config::{ClientOptions, Config};
    use crate::error::{Error, ErrorKind};

    use super::{Segment, build};

    fn config(token: &str) -> Config {
        Config::new(ClientOptions::token(token))
    }

    // Collects the formatted log lines of the current thread.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> IoResult<()> {
            Ok(())
        }
    }

    #[test]
    fn join_segments() {
        let config = config("abc");

        assert_eq!(
            build(&config, &path!["devices"]),
            Ok("https://api.particle.io/v1/devices?access_token=abc".into())
        );
        assert_eq!(
            build(&config, &path!["devices", "42", "temperature"]),
            Ok("https://api.particle.io/v1/devices/42/temperature?access_token=abc".into())
        );
        assert_eq!(
            build(&config, &path!["orgs", "acme", "products", 7u32]),
            Ok("https://api.particle.io/v1/orgs/acme/products/7?access_token=abc".into())
        );
    }

    #[test]
    fn empty_token() {
        assert_eq!(
            build(&config(""), &path!["devices"]),
            Err(Error::new(ErrorKind::Configuration, "Undefined token."))
        );
    }

    #[test]
    fn invalid_segments() {
        let config = config("abc");

        for segments in [
            path!["devices", ""],
            path!["devices", 0u32],
            path!["devices", None::<&str>],
            path!["", "devices"],
        ] {
            let error = build(&config, &segments).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        }

        assert_eq!(
            build(&config, &path!["devices", "42", 0u64]),
            Err(Error::new(
                ErrorKind::InvalidArgument,
                "Undefined or invalid section in path at position 2."
            ))
        );
    }

    #[test]
    fn token_checked_first() {
        let error = build(&config(""), &path!["devices", ""]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn segment_conversions() {
        let owned = String::from("led");

        assert_eq!(Segment::from(&owned), Segment::from("led"));
        assert_eq!(Segment::from(owned.clone()), Segment::from("led"));
        assert_eq!(Segment::from(Some("led")), Segment::from("led"));
        assert_eq!(Segment::from(5u8), Segment::Number(5));
        assert_eq!(Segment::from(None::<u32>), Segment::Missing);
    }

    #[test]
    fn debug_logging() {
        let captured = Captured::default();
        let writer = captured.clone();
        let _guard = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .finish()
            .set_default();

        let quiet = Config::new(ClientOptions::token("abc"));
        let _ = build(&quiet, &path!["devices", "quiet"]).unwrap();
        assert!(!captured.contents().contains("devices/quiet"));

        let verbose = Config::new(ClientOptions::token("abc").debug(true));
        let _ = build(&verbose, &path!["devices", "verbose"]).unwrap();
        assert!(
            captured
                .contents()
                .contains("https://api.particle.io/v1/devices/verbose?access_token=abc")
        );
    }
}
