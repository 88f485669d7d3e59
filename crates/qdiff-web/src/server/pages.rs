//! Server-rendered HTML pages

use crate::presenter::{escape_html, render_error, render_warning, ResultView};

/// What to show under the form after a submission
#[derive(Debug, Clone)]
pub enum Outcome {
    Result(ResultView),
    Warning(String),
    Error(String),
}

impl Outcome {
    fn render(&self) -> String {
        match self {
            Self::Result(view) => view.render_html(),
            Self::Warning(message) => render_warning(message),
            Self::Error(message) => render_error(message),
        }
    }
}

/// The analyzer page: form, then an optional outcome
pub fn index_page(question: &str, outcome: Option<&Outcome>) -> String {
    let mut body = format!(
        r#"<form class="analyze-form" method="post" action="/analyze">
  <label for="question">Enter your question</label>
  <textarea id="question" name="question" rows="6" placeholder="Type or paste your exam question here...">{question}</textarea>
  <button type="submit">Analyze Question</button>
  <div class="spinner" id="spinner" hidden>Analyzing complexity and patterns...</div>
</form>
"#,
        question = escape_html(question),
    );

    if let Some(outcome) = outcome {
        body.push_str(r#"<div class="outcome">"#);
        body.push('\n');
        body.push_str(&outcome.render());
        body.push_str("</div>\n");
    }

    layout(&body)
}

/// Shown in place of the form when the artifacts could not be loaded
pub fn unavailable_page(error: &str, expected_files: &[String]) -> String {
    let mut body = format!(
        "{}<p class=\"hint\">Make sure these files exist and are readable:</p>\n<ul class=\"file-list\">\n",
        render_error(&format!("Error loading model: {error}"))
    );
    for file in expected_files {
        body.push_str(&format!("  <li><code>{}</code></li>\n", escape_html(file)));
    }
    body.push_str("</ul>\n");

    layout(&body)
}

fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Question Difficulty Analyzer</title>
  <link rel="stylesheet" href="/assets/style.css">
</head>
<body>
  <main class="container">
    <header>
      <h1>🎓 Question Difficulty Analyzer</h1>
      <p class="subtitle">Predict whether an exam question is Easy, Medium, or Hard using classical machine learning.</p>
    </header>
{body}  </main>
  <script src="/assets/app.js"></script>
</body>
</html>
"#
    )
}
