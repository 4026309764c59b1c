#![cfg(feature = "comrak")]
#![allow(clippy::expect_used, reason = "Expect is acceptable in tests")]

use mkdoc_extract::{ExtractOptions, Extractor, PackageInfo};
use mkdoc_html::{ComrakRenderer, to_html};

fn extract(source: &str) -> mkdoc_extract::Extraction {
  let options = ExtractOptions {
    today: "2024-05-01".to_string(),
    ..ExtractOptions::default()
  };
  Extractor::new(options, &PackageInfo::default())
    .expect("extractor")
    .extract(source)
    .expect("extract")
}

#[test]
fn test_front_matter_fields_render_literally() {
  let extraction = extract(
    "#' ---\n#' title: X\n#' author: Y\n#' date: Z\n#' ---\n#' \n#' Body \
     text.\n",
  );
  let html = to_html(&extraction, &ComrakRenderer, true).expect("html");

  assert!(html.starts_with("<!DOCTYPE html>"));
  assert!(html.contains("<title>X</title>"));
  assert!(html.contains("<div class=\"title\"><h1>X</h1></div>"));
  assert!(html.contains("<div class=\"author\"><h3>Y</h3></div>"));
  assert!(html.contains("<div class=\"date\"><h3>Z</h3></div>"));
  assert!(html.contains("<p>Body text.</p>"));
}

#[test]
fn test_synopsis_and_code_styling() {
  let extraction = extract(
    "#' ## <a name='synopsis'>SYNOPSIS</a>\n#'\n#' ```\n#' mkdoc in out\n#' \
     ```\n#'\n#' ## <a name='example'>EXAMPLE</a>\n#'\n#' ```tcl\n#' puts \
     hi\n#' ```\n",
  );
  let html = to_html(&extraction, &ComrakRenderer, true).expect("html");

  assert!(html.contains("<pre class='synopsis'><code>mkdoc in out"));
  assert!(html.contains("<pre class=\"tcl\"><code class=\"language-tcl\">puts hi"));
}

#[test]
fn test_default_stylesheet_is_embedded() {
  let extraction = extract("#' text\n");
  let html = to_html(&extraction, &ComrakRenderer, true).expect("html");
  assert!(html.contains("<style>"));
  assert!(html.contains("pre.synopsis"));
}

#[test]
fn test_image_tag_reaches_html() {
  let extraction = extract("#' ![](pic.png)\n");
  let html = to_html(&extraction, &ComrakRenderer, false).expect("html");
  assert!(html.contains("<image src=\"pic.png\"></img>"));
}
