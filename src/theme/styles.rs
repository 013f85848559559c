//! Global CSS styles for Polaroid.
//!
//! Indigo page and zinc "paper" card. Card sizes and font families are set
//! inline by the preview from the exporter's card style.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INDIGO (Page, Panels, Accents) */
  --indigo-400: #818cf8;
  --indigo-500: #6366f1;
  --indigo-600: #4f46e5;
  --indigo-700: #4338ca;
  --indigo-800: #3730a3;
  --indigo-950: #1e1b4b;

  /* ZINC (Paper, Text) */
  --zinc-100: #f4f4f5;
  --zinc-200: #e4e4e7;
  --zinc-300: #d4d4d8;
  --zinc-900: #18181b;

  /* SEMANTIC */
  --danger: #fca5a5;

  /* Typography */
  --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;

  --shadow-deep: 0 20px 25px -5px var(--indigo-950), 0 8px 10px -6px var(--indigo-950);
  --transition-fast: 75ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--indigo-700);
  color: var(--zinc-100);
  min-height: 100vh;
}

/* === Layout === */
.page {
  display: grid;
  place-items: center;
  min-height: 100vh;
}

.panel {
  display: grid;
  gap: 2rem;
  width: calc(100% - 4rem);
  margin: 2rem;
  padding: 2rem;
  border-radius: 0.75rem;
  background: var(--indigo-800);
  box-shadow: var(--shadow-deep);
}

@media (min-width: 1024px) {
  .panel {
    grid-template-columns: 1fr 1fr;
  }
}

.editor {
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 1rem;
}

.editor__quote-row {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.editor__quote-row .form-field {
  flex: 1;
}

.editor__actions {
  display: flex;
  justify-content: space-around;
}

.status-line {
  font-size: 0.875rem;
  color: var(--zinc-300);
  text-align: center;
}

/* === Form Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  width: 100%;
}

.input-field {
  width: 100%;
  padding: 0.5rem 1rem;
  border: none;
  background: var(--zinc-100);
  color: black;
  font: inherit;
  box-shadow: 0 4px 6px -1px var(--indigo-950);
}

.textarea {
  height: 8rem;
  resize: vertical;
}

/* === Buttons === */
.btn:hover:not(:disabled),
.btn:focus {
  background: var(--indigo-500) !important;
}

.btn:active {
  background: var(--indigo-400) !important;
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn__icon {
  margin-right: 0.5rem;
}

.alignment-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.25rem;
  width: fit-content;
  margin: 0 auto;
}

.icon-btn {
  width: 2rem;
  height: 2rem;
  border: none;
  background: transparent;
  color: var(--zinc-100);
  font-size: 1.25rem;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.icon-btn:hover,
.icon-btn:focus {
  color: var(--zinc-200);
}

.icon-btn:active,
.icon-btn--active {
  color: var(--indigo-400);
}

/* === Polaroid Card === */
.preview {
  display: grid;
  place-items: center;
  height: 100%;
  overflow: auto;
}

.polaroid {
  display: flex;
  flex-direction: column;
  flex: none;
  background: var(--zinc-100);
  box-shadow: var(--shadow-deep);
}

.polaroid__photo {
  position: relative;
  display: grid;
  place-items: center;
  flex: none;
}

.polaroid__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.polaroid__overlay {
  position: absolute;
  inset: 0;
  display: flex;
  background: rgba(30, 27, 75, 0.3);
}

.polaroid__quote {
  white-space: pre-wrap;
  color: white;
}

.polaroid__name {
  white-space: pre-wrap;
  text-align: right;
  color: var(--zinc-900);
}

.polaroid__error {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 2rem;
  color: var(--indigo-950);
  text-align: center;
}

.polaroid__error-detail {
  font-size: 0.75rem;
  color: var(--indigo-800);
}

/* === Loading === */
.loading {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  color: var(--indigo-800);
}

.loading-spinner {
  width: 3rem;
  height: 3rem;
  border: 4px solid var(--zinc-300);
  border-top-color: var(--indigo-800);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}
"#;
