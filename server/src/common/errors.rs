use thiserror::Error;

/// Errors produced while turning text into a color.
///
/// Every color-consuming operation in the library reports unparseable input
/// through this type: the color adapter itself, theme color derivation and
/// the color query codec (wrapped in [`ColorQueryError::InvalidColor`]).
///
/// # Examples
///
/// ```no_run
/// use server::color::Color;
/// use server::common::errors::ColorError;
///
/// match Color::parse("not-a-color") {
///     Ok(color) => println!("parsed {color}"),
///     Err(ColorError::InvalidColor { input }) => eprintln!("cannot parse '{input}'"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a hex, `rgb()`, `hsl()` or named CSS color.
    #[error("Invalid color '{input}'")]
    InvalidColor { input: String },
}

/// Errors produced while parsing a `type|color` color query string.
///
/// Parsing checks the separator first, then the slot type, then the color,
/// so a string with both a bad type and no color reports [`MissingColor`].
///
/// [`MissingColor`]: ColorQueryError::MissingColor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorQueryError {
    /// No `|` separator, or nothing after it.
    #[error("Missing ColorQuery color")]
    MissingColor,

    /// The part before `|` is not one of the five slot names.
    #[error("Invalid ColorQuery type '{kind}'")]
    InvalidType { kind: String },

    /// The part after `|` could not be parsed as a color.
    #[error("Invalid ColorQuery color: {0}")]
    InvalidColor(#[from] ColorError),
}

/// Errors returned by the marketplace client.
///
/// Low-level failures ([`RequestFailed`], [`Transport`], [`InvalidResponse`])
/// come out of a raw query. The canned queries wrap
/// whatever went wrong in a use-case specific variant whose message embeds
/// the underlying one, so callers logging only `to_string()` still see the
/// root cause.
///
/// # Examples
///
/// ```no_run
/// use server::common::errors::MarketplaceError;
/// use server::marketplace::MarketplaceClient;
///
/// async fn lookup(client: &MarketplaceClient) {
///     match client.query_extension_slug("dracula-theme.theme-dracula").await {
///         Ok(results) => println!("{} results", results.len()),
///         Err(MarketplaceError::ExtensionSlugQuery { slug, source }) => {
///             log::error!("lookup of {slug} failed: {source}");
///         }
///         Err(other) => log::error!("{other}"),
///     }
/// }
/// ```
///
/// [`RequestFailed`]: MarketplaceError::RequestFailed
/// [`Transport`]: MarketplaceError::Transport
/// [`InvalidResponse`]: MarketplaceError::InvalidResponse
#[derive(Debug, Error)]
pub enum MarketplaceError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("Request failed: {url} - {reason}")]
    RequestFailed { url: String, reason: String },

    /// The marketplace answered with a non-success status.
    #[error("Marketplace API response status '{status_text}'")]
    Transport { status: u16, status_text: String },

    /// The body was not JSON or had no `results[0]`.
    #[error("Invalid response: expected {expected}, got {actual}")]
    InvalidResponse { expected: String, actual: String },

    #[error("MarketplaceAPI.queryUpdatedExtensions failed: {source}")]
    UpdatedExtensionsQuery {
        #[source]
        source: Box<MarketplaceError>,
    },

    #[error("MarketplaceAPI.queryExtensionId failed for {extension_id}: {source}")]
    ExtensionIdQuery {
        extension_id: String,
        #[source]
        source: Box<MarketplaceError>,
    },

    #[error("MarketplaceAPI.queryExtensionSlug failed for {slug}: {source}")]
    ExtensionSlugQuery {
        slug: String,
        #[source]
        source: Box<MarketplaceError>,
    },
}

impl MarketplaceError {
    /// HTTP status code when the marketplace rejected the request,
    /// looking through the canned-query wrappers.
    pub fn status(&self) -> Option<u16> {
        match self {
            MarketplaceError::Transport { status, .. } => Some(*status),
            MarketplaceError::UpdatedExtensionsQuery { source }
            | MarketplaceError::ExtensionIdQuery { source, .. }
            | MarketplaceError::ExtensionSlugQuery { source, .. } => source.status(),
            _ => None,
        }
    }
}

/// Errors produced while building key-value records.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("Failed to serialize KV value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
