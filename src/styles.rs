//! Gallery stylesheet - inject once as a <style> block
//!
//! Palettes hang off `html[data-theme=...]`; components only reference the
//! custom properties.

pub const STYLESHEET: &str = r#"
:root, html[data-theme="dark"] {
  --bg: #0f0f1a; --surface: #1a1a2e; --border: #2a2a4a;
  --text: #e5e7eb; --muted: #9ca3af; --accent: #6366f1; --accent-text: #ffffff;
  --code-bg: #111827; --tok-comment: #6b7280; --tok-string: #86efac; --tok-keyword: #c4b5fd; --tok-number: #fbbf24;
  --success: #22c55e; --error: #ef4444;
}
html[data-theme="light"] {
  --bg: #f8fafc; --surface: #ffffff; --border: #e2e8f0;
  --text: #0f172a; --muted: #64748b; --accent: #4f46e5; --accent-text: #ffffff;
  --code-bg: #f1f5f9; --tok-comment: #94a3b8; --tok-string: #15803d; --tok-keyword: #7c3aed; --tok-number: #b45309;
}
html[data-theme="ocean"] {
  --bg: #082f49; --surface: #0c4a6e; --border: #075985;
  --text: #e0f2fe; --muted: #7dd3fc; --accent: #06b6d4; --accent-text: #082f49;
  --code-bg: #0b3954; --tok-comment: #38bdf8; --tok-string: #a7f3d0; --tok-keyword: #67e8f9; --tok-number: #fde68a;
}
html[data-theme="sunset"] {
  --bg: #2a1215; --surface: #431c1f; --border: #7c2d12;
  --text: #ffedd5; --muted: #fdba74; --accent: #f97316; --accent-text: #2a1215;
  --code-bg: #3b1518; --tok-comment: #fb923c; --tok-string: #fde047; --tok-keyword: #f9a8d4; --tok-number: #fca5a5;
}
html[data-theme="midnight"] {
  --bg: #000000; --surface: #0a0a0a; --border: #1f1f1f;
  --text: #d4d4d8; --muted: #71717a; --accent: #a855f7; --accent-text: #ffffff;
  --code-bg: #050505; --tok-comment: #52525b; --tok-string: #4ade80; --tok-keyword: #c084fc; --tok-number: #facc15;
}
html.theme-transition, html.theme-transition * {
  transition: background-color 0.3s, color 0.3s, border-color 0.3s !important;
}

body { margin: 0; background: var(--bg); color: var(--text); font-family: system-ui, -apple-system, sans-serif; }
.app-header { display: flex; align-items: center; justify-content: space-between; padding: 24px 32px; }
.app-header h1 { margin: 0; font-size: 28px; letter-spacing: -0.5px; }
.app-header p { margin: 4px 0 0 0; color: var(--muted); font-size: 14px; }
.theme-switcher { padding: 8px 16px; border-radius: 999px; border: 1px solid var(--border); background: var(--surface); color: var(--text); cursor: pointer; text-transform: capitalize; }

.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 20px; padding: 0 32px 48px; }
.bookmarklet-card { position: relative; background: var(--surface); border: 1px solid var(--border); border-radius: 10px; padding: 16px; cursor: default; }
.bookmarklet-card:hover .copy-tooltip { opacity: 1; }
.copy-tooltip { position: absolute; top: -28px; right: 12px; font-size: 12px; color: var(--muted); opacity: 0; transition: opacity 0.15s; pointer-events: none; }
.card-header { display: flex; align-items: center; gap: 8px; margin-bottom: 12px; }
.card-title { flex: 1; font-weight: 600; }
.card-category { font-size: 11px; color: var(--muted); border: 1px solid var(--border); border-radius: 999px; padding: 2px 8px; }
.drag-handle { cursor: grab; color: var(--muted); user-select: none; letter-spacing: -3px; }
.info-button, .action-button { display: inline-flex; align-items: center; gap: 6px; padding: 6px 10px; border-radius: 6px; border: 1px solid var(--border); background: transparent; color: var(--text); cursor: pointer; font-size: 13px; }
.action-button { background: var(--accent); color: var(--accent-text); border-color: var(--accent); }
.info-button svg, .action-button svg, .copy-feedback svg { width: 16px; height: 16px; }
.info-button span { display: none; }
.pulse { animation: pulse 0.3s ease-out; }
@keyframes pulse { 0% { transform: scale(1); } 50% { transform: scale(1.08); } 100% { transform: scale(1); } }

.editor-container { max-height: 160px; overflow: hidden; border-radius: 6px; background: var(--code-bg); transition: max-height 0.3s; }
.bookmarklet-card.expanded .editor-container { max-height: 640px; overflow: auto; }
.editor__code { margin: 0; padding: 12px; font-size: 12px; line-height: 1.5; white-space: pre-wrap; cursor: copy; user-select: none; }
.token.comment { color: var(--tok-comment); font-style: italic; }
.token.string { color: var(--tok-string); }
.token.keyword { color: var(--tok-keyword); }
.token.number { color: var(--tok-number); }

.copy-feedback { position: fixed; bottom: 24px; left: 50%; transform: translate(-50%, 20px); opacity: 0; display: flex; align-items: center; gap: 8px; padding: 10px 16px; border-radius: 8px; background: var(--success); color: #fff; transition: opacity 0.3s, transform 0.3s; z-index: 1000; }
.copy-feedback.error { background: var(--error); }
.copy-feedback.visible { opacity: 1; transform: translate(-50%, 0); }
.copy-feedback-mini { position: fixed; transform: translateX(-50%); padding: 4px 8px; border-radius: 4px; background: var(--accent); color: var(--accent-text); font-size: 12px; opacity: 0; transition: opacity 0.2s; pointer-events: none; z-index: 1001; }
.copy-feedback-mini.show { opacity: 1; }

.overlay { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.6); opacity: 0; transition: opacity 0.3s; z-index: 900; }
.overlay.visible { opacity: 1; }
.description-card { position: fixed; top: 50%; left: 50%; width: min(440px, 90vw); transform: translate(-50%, -46%); opacity: 0; background: var(--surface); border: 1px solid var(--border); border-radius: 12px; padding: 24px; transition: opacity 0.3s, transform 0.3s; z-index: 950; }
.description-card.visible { opacity: 1; transform: translate(-50%, -50%); }
.description-card .close-btn { position: absolute; top: 8px; right: 12px; border: none; background: transparent; color: var(--muted); font-size: 22px; cursor: pointer; }
.description-card p { color: var(--muted); line-height: 1.5; }
.tag-list { display: flex; flex-wrap: wrap; gap: 6px; margin-bottom: 16px; }
.tag { font-size: 11px; padding: 2px 8px; border-radius: 999px; background: var(--code-bg); color: var(--muted); }
.card-actions { display: flex; flex-direction: column; gap: 8px; }
.card-actions .action-button { width: 100%; justify-content: center; }
.run-button { background: transparent; color: var(--text); border-color: var(--border); }

.drag-helper { position: fixed; top: -100px; left: -100px; width: 1px; height: 1px; opacity: 0; pointer-events: none; }
"#;
