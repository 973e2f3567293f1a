//! The single page console served at `/`.

use alglobo_core::messages;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>AlGlobo console</title>
<style>
  body { font-family: monospace; background: #1e1e1e; color: #ddd; margin: 2em; }
  .RequestPoster { display: flex; gap: 1em; align-items: stretch; }
  .console { flex: 1; background: #111; color: #9f9; border: 1px solid #444; padding: .5em; }
  .actions { display: flex; flex-direction: column; gap: .5em; justify-content: center; }
  button { font-family: monospace; padding: .4em 1em; }
</style>
</head>
<body>
<h1>AlGlobo</h1>
<p>REST API client for the AlGlobo reservation system.</p>
<div class="RequestPoster">
  <textarea id="input" rows="10" class="input console" placeholder="__INPUT_PLACEHOLDER__"></textarea>
  <div class="actions">
    <button data-action="send">Send</button>
    <button data-action="status">Check status</button>
    <button data-action="metrics">Metrics</button>
    <button data-action="clear">Clear</button>
  </div>
  <textarea id="output" rows="10" class="output console" readonly placeholder="__OUTPUT_PLACEHOLDER__"></textarea>
</div>
<script>
  let state = { input: "", output: "", reservation_ids: [] };
  const input = document.getElementById("input");
  const output = document.getElementById("output");

  async function run(action) {
    state = { ...state, input: input.value };
    try {
      const res = await fetch("/console/" + action, {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify(state),
      });
      if (!res.ok) {
        output.value = "ERROR: " + (await res.text());
        return;
      }
      state = await res.json();
      input.value = state.input;
      output.value = state.output;
    } catch (err) {
      output.value = "ERROR: console server unreachable\n" + err;
    }
  }

  document.querySelectorAll("button[data-action]").forEach((button) => {
    button.addEventListener("click", () => run(button.dataset.action));
  });
</script>
</body>
</html>
"#;

pub fn render() -> String {
    TEMPLATE
        .replace("__INPUT_PLACEHOLDER__", &messages::input_placeholder())
        .replace("__OUTPUT_PLACEHOLDER__", messages::OUTPUT_PLACEHOLDER)
}
