//! Studio styles

pub const STUDIO_STYLES: &str = r#"
:root {
    --color-primary: #6366f1;
    --color-secondary: #94a3b8;
    --color-background: #0b1220;
    --color-surface: #111827;
    --color-text: #e2e8f0;
    --color-text-muted: #94a3b8;
    --color-border: #1f2937;
    --color-error: #ef4444;
    --color-success: #22c55e;
}

body {
    margin: 0;
    background: var(--color-background);
    color: var(--color-text);
    font-family: system-ui, -apple-system, sans-serif;
}

.studio-main {
    max-width: 56rem;
    margin: 0 auto;
    padding: 1.5rem 1rem 4rem;
}

.studio-empty {
    color: var(--color-text-muted);
    text-align: center;
    margin-top: 4rem;
}

/* ── Buttons ── */
.doc-btn {
    padding: 0.4rem 0.9rem;
    border-radius: 0.375rem;
    border: 1px solid var(--color-border);
    background: transparent;
    color: var(--color-text);
    cursor: pointer;
    white-space: nowrap;
    display: inline-flex;
    align-items: center;
    gap: 0.4rem;
}

.doc-btn:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.doc-btn--primary {
    background: var(--color-primary);
    border-color: var(--color-primary);
    color: #fff;
}

.doc-spinner {
    width: 0.85rem;
    height: 0.85rem;
    border: 2px solid rgba(255, 255, 255, 0.4);
    border-top-color: #fff;
    border-radius: 50%;
    animation: doc-spin 0.8s linear infinite;
}

@keyframes doc-spin {
    to { transform: rotate(360deg); }
}

/* ── Viewing ── */
.doc-view-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 2rem;
}

.doc-view-title {
    font-size: 2.25rem;
    margin: 0;
}

/* ── Editing ── */
.doc-editor {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.doc-editor-toolbar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
}

.doc-editor-actions {
    display: flex;
    gap: 0.5rem;
}

.doc-title-input,
.doc-content-input {
    background: var(--color-surface);
    color: var(--color-text);
    border: 1px solid var(--color-border);
    border-radius: 0.375rem;
    padding: 0.5rem 0.75rem;
}

.doc-title-input {
    flex: 1;
    font-size: 1.5rem;
    font-weight: 700;
}

.doc-content-input {
    min-height: 400px;
    font-family: ui-monospace, monospace;
    resize: vertical;
}

.doc-preview {
    border: 1px solid var(--color-border);
    border-radius: 0.5rem;
    padding: 1rem;
}

.doc-editor-footer {
    display: flex;
    justify-content: space-between;
    font-size: 0.85rem;
    color: var(--color-text-muted);
}

.doc-shortcuts ul {
    margin: 0.25rem 0 0;
    padding-left: 1.25rem;
}

/* ── Markdown ── */
.markdown-content {
    line-height: 1.6;
}

.markdown-content pre {
    background: var(--color-surface);
    padding: 0.75rem;
    border-radius: 0.375rem;
    overflow-x: auto;
}

.markdown-content table {
    border-collapse: collapse;
}

.markdown-content th,
.markdown-content td {
    border: 1px solid var(--color-border);
    padding: 0.3rem 0.6rem;
}

/* ── Failure boundary ── */
.boundary-fallback {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    min-height: 60vh;
    padding: 1rem;
}

.doc-view .boundary-fallback,
.doc-preview .boundary-fallback {
    min-height: 0;
    padding: 2rem 1rem;
}

.boundary-fallback-title {
    font-size: 1.5rem;
    margin-bottom: 1rem;
}

.boundary-fallback-message {
    color: var(--color-text-muted);
    font-size: 0.875rem;
    margin-bottom: 1rem;
}

/* ── Agent state panel ── */
.state-panel {
    position: fixed;
    bottom: 1rem;
    right: 1rem;
    max-width: 24rem;
    padding: 1rem;
    border-radius: 0.5rem;
    border: 1px solid var(--color-border);
    background: var(--color-background);
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.4);
    font-size: 0.75rem;
}

.state-panel h3 {
    font-size: 0.875rem;
    margin: 0 0 0.5rem;
}

.state-panel-line { margin: 0 0 0.4rem; }
.state-panel-line--node { color: var(--color-secondary); }
.state-panel-line--status,
.state-panel-line--editing { color: var(--color-primary); }

.state-panel pre {
    max-height: 10rem;
    overflow: auto;
    margin: 0;
}

/* ── Notices ── */
.notice-stack {
    position: fixed;
    top: 1rem;
    right: 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    z-index: 50;
}

.notice {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.6rem 0.9rem;
    border-radius: 0.375rem;
    background: var(--color-surface);
    border-left: 3px solid var(--color-border);
    font-size: 0.875rem;
}

.notice--success { border-left-color: var(--color-success); }
.notice--error   { border-left-color: var(--color-error); }

.notice-dismiss {
    background: none;
    border: none;
    color: var(--color-text-muted);
    cursor: pointer;
}
"#;
