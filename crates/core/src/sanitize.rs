//! HTML sanitization for user-submitted article fields.
//!
//! Titles are plain text: `<`, `>` and `&` are escaped so injected markup
//! renders literally. Quotes are left alone. Content is a restricted HTML subset:
//! script blocks, inline event handlers and `javascript:` URLs are removed,
//! everything else is passed through untouched.
//!
//! Both functions are idempotent.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// A complete `<script ...> ... </script>` element, across lines.
static SCRIPT_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("valid regex")
});

/// Any opening or closing script tag left over once full blocks are gone.
static SCRIPT_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?script\b[^>]*>").expect("valid regex"));

/// An opening tag: name in group 1, raw attribute text in group 2.
///
/// Attributes follow the HTML tokenizer: quoted values may contain `>`,
/// `/` separates attributes like whitespace does, and a name may start
/// right after a quoted value.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<([a-zA-Z][^\s/>]*)((?:[\s/]*[^\s/>][^\s/>=]*(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]*))?)*[\s/]*)>"#,
    )
    .expect("valid regex")
});

/// One attribute inside a tag: name in group 1, raw value in group 2.
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s/>][^\s/>=]*)(?:\s*=\s*("[^"]*"|'[^']*'|[^\s>]*))?"#)
        .expect("valid regex")
});

/// Event names whose `on<name>` attribute is an inline handler.
const EVENT_HANDLERS: &[&str] = &[
    "abort", "afterprint", "animationcancel", "animationend", "animationiteration",
    "animationstart", "auxclick", "beforecopy", "beforecut", "beforeinput", "beforepaste",
    "beforeprint", "beforetoggle", "beforeunload", "begin", "blur", "cancel", "canplay",
    "canplaythrough", "change", "click", "close", "contentvisibilityautostatechange",
    "contextlost", "contextmenu", "contextrestored", "copy", "cuechange", "cut", "dblclick",
    "drag", "dragend", "dragenter", "dragexit", "dragleave", "dragover", "dragstart", "drop",
    "durationchange", "emptied", "end", "ended", "error", "focus", "focusin", "focusout",
    "formdata", "fullscreenchange", "fullscreenerror", "gotpointercapture", "hashchange",
    "input", "invalid", "keydown", "keypress", "keyup", "languagechange", "load",
    "loadeddata", "loadedmetadata", "loadend", "loadstart", "lostpointercapture", "message",
    "messageerror", "mousedown", "mouseenter", "mouseleave", "mousemove", "mouseout",
    "mouseover", "mouseup", "mousewheel", "offline", "online", "pagehide", "pagereveal",
    "pageshow", "pageswap", "paste", "pause", "play", "playing", "pointercancel",
    "pointerdown", "pointerenter", "pointerleave", "pointermove", "pointerout",
    "pointerover", "pointerrawupdate", "pointerup", "popstate", "progress", "ratechange",
    "rejectionhandled", "repeat", "reset", "resize", "scroll", "scrollend",
    "scrollsnapchange", "scrollsnapchanging", "search", "securitypolicyviolation", "seeked",
    "seeking", "select", "selectionchange", "selectstart", "show", "slotchange", "stalled",
    "storage", "submit", "suspend", "timeupdate", "toggle", "touchcancel", "touchend",
    "touchmove", "touchstart", "transitioncancel", "transitionend", "transitionrun",
    "transitionstart", "unhandledrejection", "unload", "volumechange", "waiting",
    "webkitanimationend", "webkitanimationiteration", "webkitanimationstart",
    "webkittransitionend", "wheel",
];

/// Attributes whose value is loaded or navigated to as a URL.
const URL_ATTRIBUTES: &[&str] = &[
    "action", "background", "data", "formaction", "href", "lowsrc", "poster", "src",
    "xlink:href",
];

/// URL schemes that execute script.
const SCRIPT_SCHEMES: &[&str] = &["javascript:", "vbscript:"];

// ---------------------------------------------------------------------------
// Title
// ---------------------------------------------------------------------------

/// Escape a title so it renders as literal text.
///
/// Existing entities are decoded before encoding, which keeps the result
/// stable when an already escaped title passes through again.
pub fn sanitize_title(title: &str) -> String {
    let decoded = html_escape::decode_html_entities(title);
    html_escape::encode_text(&decoded).into_owned()
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// Strip script-capable constructs from article content.
///
/// Runs to a fixed point so fragments that reassemble into a script tag
/// after one removal (`<scr<script></script>ipt>`) are caught as well.
pub fn sanitize_content(content: &str) -> String {
    let mut current = content.to_string();
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(input: &str) -> String {
    let without_blocks = SCRIPT_BLOCK_RE.replace_all(input, "");
    let without_tags = SCRIPT_TAG_RE.replace_all(&without_blocks, "");
    TAG_RE
        .replace_all(&without_tags, |caps: &regex::Captures<'_>| sanitize_tag(caps))
        .into_owned()
}

/// Rebuild a tag without its dangerous attributes. A tag with nothing to
/// drop is returned byte for byte.
fn sanitize_tag(caps: &regex::Captures<'_>) -> String {
    let name = &caps[1];
    let attrs = &caps[2];

    let mut kept = Vec::new();
    let mut dropped = false;
    let mut last_end = 0;
    for attr in ATTR_RE.captures_iter(attrs) {
        let Some(full) = attr.get(0) else { continue };
        last_end = full.end();
        if is_dangerous_attribute(&attr[1], attr.get(2).map(|v| v.as_str())) {
            dropped = true;
        } else {
            kept.push(full.as_str());
        }
    }

    if !dropped {
        return caps[0].to_string();
    }

    let mut tag = format!("<{name}");
    for attr in kept {
        tag.push(' ');
        tag.push_str(attr);
    }
    let trimmed = attrs.trim_end();
    if trimmed.ends_with('/') && last_end < trimmed.len() {
        tag.push_str(" /");
    }
    tag.push('>');
    tag
}

fn is_dangerous_attribute(name: &str, value: Option<&str>) -> bool {
    let name = name.to_ascii_lowercase();
    if let Some(event) = name.strip_prefix("on") {
        if EVENT_HANDLERS.contains(&event) {
            return true;
        }
    }
    URL_ATTRIBUTES.contains(&name.as_str()) && value.is_some_and(is_script_url)
}

/// Whether an attribute value resolves to a script URL once quotes,
/// entities and the whitespace browsers ignore are taken out.
fn is_script_url(raw: &str) -> bool {
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| raw.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(raw);
    let decoded = html_escape::decode_html_entities(unquoted);
    let compact: String = decoded
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    SCRIPT_SCHEMES
        .iter()
        .any(|scheme| compact.starts_with(scheme))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
