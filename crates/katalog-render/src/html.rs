//! HTML page composition.
//!
//! Each page is written into a [`Page`] buffer: literal markup goes in
//! unchanged, interpolated values go through `pulldown-cmark-escape`.

use katalog_core::SiteConfig;
use pulldown_cmark_escape::{escape_href, escape_html};

use crate::view::{DetailView, ListingView};

const BASE_STYLE: &str = "\
        body { font-family: Arial, sans-serif; margin: 0; padding: 0; background: #f9f9f9; }
        .header { background: #336699; color: white; padding: 20px; text-align: center; }
        .qr { margin-top: 10px; }
        a { color: #336699; text-decoration: none; }
        a:hover { text-decoration: underline; }
";

const LISTING_STYLE: &str = "\
        .container { width: 90%; margin: 20px auto; }
        .card {
            background: white;
            border: 1px solid #ddd;
            border-radius: 4px;
            margin-bottom: 20px;
            padding: 15px;
            overflow: hidden;
        }
        .card img { float: left; margin-right: 15px; width: 150px; height: 150px; object-fit: cover; }
        .card h2 { margin-top: 0; }
        .clear { clear: both; }
";

const PANEL_STYLE: &str = "\
        .container { width: 80%; margin: 20px auto; background: white; padding: 20px; border: 1px solid #ddd; border-radius: 4px; }
        .instrument-image { float: right; margin: 0 0 20px 20px; width: 300px; height: 300px; object-fit: cover; }
";

/// Text before an artifact's alt text.
const QR_ALT_PREFIX: &str = "QR Code untuk ";

// ============================================================================
// Page buffer
// ============================================================================

struct Page {
    out: String,
}

impl Page {
    fn new() -> Self {
        Self {
            out: String::with_capacity(4096),
        }
    }

    fn raw(&mut self, markup: &str) -> &mut Self {
        self.out.push_str(markup);
        self
    }

    fn text(&mut self, value: &str) -> &mut Self {
        written(escape_html(&mut self.out, value));
        self
    }

    fn href(&mut self, value: &str) -> &mut Self {
        written(escape_href(&mut self.out, value));
        self
    }

    /// `<!DOCTYPE>` through the opening of `<body>`.
    fn head(&mut self, title: &str, extra_style: &str) -> &mut Self {
        self.raw("<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"UTF-8\">\n    <title>")
            .text(title)
            .raw("</title>\n    <style>\n")
            .raw(BASE_STYLE)
            .raw(extra_style)
            .raw("    </style>\n</head>\n<body>\n")
    }

    fn header(&mut self, heading: &str, tagline: Option<&str>) -> &mut Self {
        self.raw("    <div class=\"header\">\n        <h1>").text(heading).raw("</h1>\n");
        if let Some(tagline) = tagline {
            self.raw("        <p>").text(tagline).raw("</p>\n");
        }
        self.raw("    </div>\n")
    }

    fn img(&mut self, indent: &str, class: Option<&str>, src: &str, alt_prefix: &str, alt: &str) -> &mut Self {
        self.raw(indent).raw("<img ");
        if let Some(class) = class {
            self.raw("class=\"").raw(class).raw("\" ");
        }
        self.raw("src=\"")
            .href(src)
            .raw("\" alt=\"")
            .text(alt_prefix)
            .text(alt)
            .raw("\">\n")
    }

    fn finish(mut self) -> String {
        self.raw("</body>\n</html>\n");
        self.out
    }
}

/// Accepts the result of writing into a `String`, which never fails.
fn written(result: std::fmt::Result) {
    debug_assert!(result.is_ok(), "writing to a String failed");
}

// ============================================================================
// Pages
// ============================================================================

/// Render the listing page: one card per entry, in the view's order.
pub fn render_listing(view: &ListingView) -> String {
    let mut page = Page::new();
    page.head(&view.site.title, LISTING_STYLE)
        .header(&view.site.title, Some(&view.site.tagline))
        .raw("    <div class=\"container\">\n");

    for card in &view.cards {
        page.raw("        <div class=\"card\">\n")
            .img("            ", None, &card.image_reference, "", &card.name)
            .raw("            <h2><a href=\"")
            .href(&card.detail_href)
            .raw("\">")
            .text(&card.name)
            .raw("</a></h2>\n            <p>")
            .text(&card.summary)
            .raw("</p>\n            <div class=\"qr\">\n")
            .img("                ", None, &card.artifact.data_uri(), QR_ALT_PREFIX, &card.name)
            .raw("            </div>\n            <div class=\"clear\"></div>\n        </div>\n");
    }

    page.raw("    </div>\n");
    page.finish()
}

/// Render the detail page of one entry, with its full description.
pub fn render_detail(view: &DetailView) -> String {
    let title = format!("{} - {}", view.name, view.site.title);
    let mut page = Page::new();
    page.head(&title, PANEL_STYLE)
        .header(&view.name, None)
        .raw("    <div class=\"container\">\n")
        .img("        ", Some("instrument-image"), &view.image_reference, "", &view.name)
        .raw("        <p>")
        .text(&view.description)
        .raw("</p>\n        <h3>QR Code</h3>\n")
        .raw("        <p>Scan QR code berikut untuk mendapatkan tautan halaman ini:</p>\n")
        .raw("        <div class=\"qr\">\n")
        .img("            ", None, &view.artifact.data_uri(), QR_ALT_PREFIX, &view.name)
        .raw("        </div>\n        <p><a href=\"")
        .href(&view.back_href)
        .raw("\">&larr; Kembali ke halaman utama</a></p>\n    </div>\n");
    page.finish()
}

/// Render the page served when an entry does not exist.
pub fn render_not_found(site: &SiteConfig) -> String {
    let title = format!("Not Found - {}", site.title);
    let mut page = Page::new();
    page.head(&title, PANEL_STYLE)
        .header("Not Found", None)
        .raw("    <div class=\"container\">\n")
        .raw("        <p>The requested URL was not found on the server. ")
        .raw("If you entered the URL manually please check your spelling and try again.</p>\n")
        .raw("        <p><a href=\"/\">&larr; Kembali ke halaman utama</a></p>\n    </div>\n");
    page.finish()
}

// ============================================================================
// Tests
// ============================================================================
