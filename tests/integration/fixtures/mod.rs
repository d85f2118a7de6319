// Test fixtures with known page content covering every casing bucket,
// attribute values that must survive, and raw-text elements that must not
// be rewritten.

/// Full sample page: every casing of the target word in visible text, the
/// word embedded in hyperlink targets and image attributes, and script and
/// style bodies mentioning it.
pub const SAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Yale University Test Page</title>
  <style>
    .yale-banner { background: #00356b; }
  </style>
  <script>
    var tracker = { school: "Yale", host: "yale.edu" };
  </script>
</head>
<body>
  <h1>Welcome to Yale University</h1>
  <p>Yale University is a private research university. YALE was founded in 1701, and students at yale still call it yAlE on forums.</p>
  <p>Contact: admissions@yale.edu</p>
  <a href="https://www.yale.edu/about">About Yale</a>
  <a href="https://www.yale.edu/admissions">Yale Admissions</a>
  <img src="https://www.yale.edu/images/logo.png" alt="Yale Logo">
</body>
</html>
"#;

/// Minimal page with no occurrence of the target word anywhere.
pub const UNRELATED_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Somewhere Else</title></head>
<body><p>Harvard and Princeton share nothing with this proxy.</p></body>
</html>
"#;

/// Page without a title element.
pub const UNTITLED_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body><p>Yale has no title here.</p></body>
</html>
"#;
