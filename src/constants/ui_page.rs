/// Single-page form served at `/`. It only talks to the JSON API and decides
/// styling from the `correct` flag of each option.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>PDF2MCQ Generator</title>
  <style>
    body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
    label { display: block; margin-top: 1rem; }
    .question { font-weight: bold; margin-top: 1.5rem; }
    .answer { color: green; font-weight: bold; }
    .error { color: #b00020; }
    .rejected { color: #8a6d3b; }
    .hidden { display: none; }
  </style>
</head>
<body>
  <h1>PDF2MCQ Generator</h1>
  <form id="mcq-form">
    <label id="key-field" class="hidden">Enter your API key
      <input type="password" id="api-key" autocomplete="off">
    </label>
    <label>Upload your PDF
      <input type="file" id="document" accept="application/pdf" required>
    </label>
    <label>Enter the number of questions you would like to generate
      <input type="number" id="count" min="1" max="100" step="1" value="10" required>
    </label>
    <p><button type="submit" id="submit">Submit</button></p>
  </form>
  <div id="status"></div>
  <div id="results"></div>
  <script>
    const form = document.getElementById("mcq-form");
    const statusEl = document.getElementById("status");
    const resultsEl = document.getElementById("results");

    fetch("/api/settings")
      .then((res) => res.json())
      .then((settings) => {
        document.getElementById("count").value = settings.default_question_count;
        if (!settings.server_key_configured) {
          document.getElementById("key-field").classList.remove("hidden");
        }
      });

    function line(tag, text, className) {
      const el = document.createElement(tag);
      el.textContent = text;
      if (className) el.className = className;
      return el;
    }

    function render(body) {
      resultsEl.replaceChildren();
      for (const q of body.questions) {
        resultsEl.append(line("p", `Question ${q.number}: ${q.question}`, "question"));
        resultsEl.append(line("p", "Options:"));
        for (const option of q.options) {
          resultsEl.append(line("p", `Option ${option.label}: ${option.text}`));
        }
        const correct = q.options.find((option) => option.correct);
        resultsEl.append(line("p", `Answer: Option ${correct.label} (${correct.text})`, "answer"));
        resultsEl.append(document.createElement("hr"));
      }
      for (const rejected of body.rejected_blocks) {
        resultsEl.append(line("p", `Skipped block ${rejected.index}: ${rejected.reason}`, "rejected"));
      }
    }

    form.addEventListener("submit", async (event) => {
      event.preventDefault();
      const file = document.getElementById("document").files[0];
      const count = document.getElementById("count").value;
      const key = document.getElementById("api-key").value;
      const headers = { "content-type": "application/pdf" };
      if (key) headers["x-api-key"] = key;

      statusEl.replaceChildren(line("p", "Generating questions..."));
      resultsEl.replaceChildren();
      const res = await fetch(`/api/mcqs?count=${encodeURIComponent(count)}`, {
        method: "POST",
        headers,
        body: file,
      });
      const body = await res.json().catch(() => ({ error: `${res.status} ${res.statusText}` }));
      if (!res.ok) {
        statusEl.replaceChildren(line("p", body.error, "error"));
        return;
      }
      statusEl.replaceChildren();
      render(body);
    });
  </script>
</body>
</html>
"#;
