#![allow(clippy::expect_used, reason = "Expect is acceptable in tests")]

use std::fs;

use mkdoc_extract::{ExtractError, ExtractOptions, extract_from_file};
use tempfile::tempdir;

fn options() -> ExtractOptions {
  ExtractOptions {
    today: "2024-05-01".to_string(),
    ..ExtractOptions::default()
  }
}

#[test]
fn test_include_is_expanded_once() {
  let dir = tempdir().expect("tempdir");
  fs::write(
    dir.path().join("part.md"),
    "Hello\nWorld\n#' #include \"nested.md\"\n",
  )
  .expect("write include");
  fs::write(dir.path().join("nested.md"), "never inlined\n")
    .expect("write nested include");

  let input = dir.path().join("demo.tcl");
  fs::write(&input, "#' before\n#' #include \"part.md\"\n#' after\n")
    .expect("write input");

  let extraction = extract_from_file(&input, options()).expect("extract");

  assert_eq!(
    extraction.body,
    "before\nHello\nWorld\n#' #include \"nested.md\"\nafter\n"
  );
  assert!(!extraction.body.contains("never inlined"));
}

#[test]
fn test_missing_include_fails() {
  let dir = tempdir().expect("tempdir");
  let input = dir.path().join("demo.tcl");
  fs::write(&input, "#' #include \"gone.md\"\n").expect("write input");

  let err = extract_from_file(&input, options()).expect_err("should fail");
  assert!(matches!(err, ExtractError::ReadInclude { .. }));
}

#[test]
fn test_missing_input_fails() {
  let dir = tempdir().expect("tempdir");
  let err = extract_from_file(dir.path().join("nope.tcl"), options())
    .expect_err("should fail");
  assert!(matches!(err, ExtractError::ReadInput { .. }));
}

#[test]
fn test_package_macros_from_tcl_file() {
  let dir = tempdir().expect("tempdir");
  let input = dir.path().join("demo.tcl");
  fs::write(
    &input,
    "#' ---\n#' title: __PKGNAME__ __PKGVERSION__\n#' ---\n#' # \
     __BASENAME__\npackage provide demo 2.1\n",
  )
  .expect("write input");

  let extraction = extract_from_file(&input, options()).expect("extract");

  assert_eq!(extraction.document.title, "demo 2.1");
  assert_eq!(extraction.body, "# demo\n");
}

#[test]
fn test_included_lines_are_sorted_and_substituted() {
  let dir = tempdir().expect("tempdir");
  fs::write(
    dir.path().join("methods.md"),
    "**zeta**\nz __DATE__\n**alpha**\na\n**mike**\nm\n",
  )
  .expect("write include");

  let input = dir.path().join("demo.tcl");
  fs::write(
    &input,
    "#' ## <a name='methods'>METHODS</a>\n#' #include \"methods.md\"\n#' ## \
     <a name='see'>SEE ALSO</a>\n",
  )
  .expect("write input");

  let body = extract_from_file(&input, options()).expect("extract").body;

  let alpha = body.find("**alpha**").expect("alpha");
  let mike = body.find("**mike**").expect("mike");
  let zeta = body.find("**zeta**").expect("zeta");
  assert!(alpha < mike && mike < zeta);
  assert!(body.contains("z 2024-05-01\n"));
  assert!(body.ends_with("## <a name='see'>SEE ALSO</a>\n"));
}
