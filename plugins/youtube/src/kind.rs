//! The per-kind configuration that drives the shared search pipeline.
//!
//! Every difference between searching for videos, live streams, playlists, and channels lives in
//! a [`KindProfile`]: what the search request asks for, which id to read from each result, where
//! the follow-up metrics come from, and how a result is rendered.

use std::fmt;
use std::str::FromStr;

/// What a search is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Video,
    Channel,
    Playlist,
    /// Videos that are broadcasting right now.
    Live,
}

impl SearchKind {
    pub const ALL: [SearchKind; 4] = [
        SearchKind::Video,
        SearchKind::Channel,
        SearchKind::Playlist,
        SearchKind::Live,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchKind::Video => "video",
            SearchKind::Channel => "channel",
            SearchKind::Playlist => "playlist",
            SearchKind::Live => "live",
        }
    }

    pub fn profile(self) -> &'static KindProfile {
        match self {
            SearchKind::Video => &VIDEO,
            SearchKind::Channel => &CHANNEL,
            SearchKind::Playlist => &PLAYLIST,
            SearchKind::Live => &LIVE,
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown search kind '{0}' (expected one of video, channel, playlist, live)")]
pub struct UnknownKind(String);

impl FromStr for SearchKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Which member of a search result's `id` object identifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdField {
    VideoId,
    ChannelId,
    PlaylistId,
}

/// Which resource list the second, batched lookup goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEndpoint {
    Videos,
    Channels,
}

impl DetailEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            DetailEndpoint::Videos => "videos",
            DetailEndpoint::Channels => "channels",
        }
    }
}

/// The follow-up request that fetches metrics for a batch of ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLookup {
    pub endpoint: DetailEndpoint,
    /// Value of the `part` parameter, e.g. `statistics`.
    pub part: &'static str,
}

/// Kind-specific knobs for the search pipeline.
///
/// Templates use `{name}` placeholders, filled in by [`render`]. Known names are `id`, `title`,
/// `owner`, `elapsed`, `description`, `views`, `viewers`, `subscribers`, and `videos`.
#[derive(Debug)]
pub struct KindProfile {
    pub kind: SearchKind,
    /// Value of the search `type` parameter.
    pub search_type: &'static str,
    pub id_field: IdField,
    /// Additional search parameters, beyond the ones every kind sends.
    pub extra_params: &'static [(&'static str, &'static str)],
    /// Where metrics come from, if this kind has any.
    pub detail: Option<DetailLookup>,
    /// Substituted for an empty owner name.
    pub empty_owner_label: Option<&'static str>,
    pub subtitle: &'static str,
    pub action_url: &'static str,
    /// Text shown when the modifier key is held.
    pub secondary: Option<&'static str>,
}

pub static VIDEO: KindProfile = KindProfile {
    kind: SearchKind::Video,
    search_type: "video",
    id_field: IdField::VideoId,
    extra_params: &[],
    detail: Some(DetailLookup {
        endpoint: DetailEndpoint::Videos,
        part: "statistics",
    }),
    empty_owner_label: None,
    subtitle: "{owner} • {views} views • {elapsed}",
    action_url: "https://www.youtube.com/watch?v={id}",
    secondary: None,
};

pub static LIVE: KindProfile = KindProfile {
    kind: SearchKind::Live,
    search_type: "video",
    id_field: IdField::VideoId,
    extra_params: &[("eventType", "live")],
    detail: Some(DetailLookup {
        endpoint: DetailEndpoint::Videos,
        part: "liveStreamingDetails",
    }),
    empty_owner_label: None,
    subtitle: "{owner} • {viewers} watching now • Started streaming {elapsed}",
    action_url: "https://www.youtube.com/watch?v={id}",
    secondary: None,
};

pub static PLAYLIST: KindProfile = KindProfile {
    kind: SearchKind::Playlist,
    search_type: "playlist",
    id_field: IdField::PlaylistId,
    extra_params: &[],
    detail: None,
    // auto-generated music playlists come back without an owner
    empty_owner_label: Some("YouTube Music"),
    subtitle: "{owner} • {elapsed}",
    action_url: "https://www.youtube.com/playlist?list={id}",
    secondary: None,
};

pub static CHANNEL: KindProfile = KindProfile {
    kind: SearchKind::Channel,
    search_type: "channel",
    id_field: IdField::ChannelId,
    extra_params: &[],
    detail: Some(DetailLookup {
        endpoint: DetailEndpoint::Channels,
        part: "statistics",
    }),
    empty_owner_label: None,
    subtitle: "{subscribers} subscribers • {views} views • {videos} videos • created {elapsed}",
    action_url: "https://www.youtube.com/channel/{id}",
    secondary: Some("{description}"),
};

/// Fills `{name}` placeholders in `template` using `lookup`.
///
/// Only the template is scanned, so substituted values are never themselves expanded. Unknown
/// placeholders are left as they are.
pub fn render<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        match lookup(&after[..close]) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kinds_parse_from_their_names() {
        for kind in SearchKind::ALL {
            assert_eq!(kind.as_str().parse::<SearchKind>().unwrap(), kind);
            assert_eq!(kind.profile().kind, kind);
        }
        assert!("videos".parse::<SearchKind>().is_err());
        assert!("".parse::<SearchKind>().is_err());
    }

    #[test]
    fn live_searches_for_broadcasting_videos() {
        let profile = SearchKind::Live.profile();
        assert_eq!(profile.search_type, "video");
        assert_eq!(profile.extra_params, &[("eventType", "live")]);
    }

    #[test]
    fn render_substitutes_known_placeholders() {
        let rendered = render("{owner} • {views} views", |name| match name {
            "owner" => Some("Rick Astley".to_string()),
            "views" => Some("1.5B".to_string()),
            _ => None,
        });
        assert_eq!(rendered, "Rick Astley • 1.5B views");
    }

    #[test]
    fn render_does_not_expand_values() {
        let rendered = render("{owner}!", |name| match name {
            "owner" => Some("{views}".to_string()),
            "views" => Some("oops".to_string()),
            _ => None,
        });
        assert_eq!(rendered, "{views}!");
    }

    #[test]
    fn render_keeps_unknown_and_unterminated_placeholders() {
        assert_eq!(render("a {nope} b", |_| None), "a {nope} b");
        assert_eq!(render("a {open", |_| Some("x".into())), "a {open");
        assert_eq!(render("no placeholders", |_| None), "no placeholders");
    }
}
