//! Global CSS styles for Prompt Gallery.
//!
//! Dark gallery theme: card grid, category tags, detail modal and the
//! wiki viewer layout.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #0f0f12;
  --bg-raised: #17171c;
  --bg-hover: #1f1f26;
  --border: #2a2a33;

  /* Accent */
  --accent: #8b7cf6;
  --accent-glow: rgba(139, 124, 246, 0.35);
  --success: #3ecf8e;
  --danger: #ff5c7a;

  /* Text */
  --text-primary: #f2f2f5;
  --text-secondary: rgba(242, 242, 245, 0.7);
  --text-muted: rgba(242, 242, 245, 0.45);

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;

  --header-height: 168px;
  --sidebar-width: 280px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

button {
  font-family: inherit;
  cursor: pointer;
}

/* === Scroll Container === */
.page-scroll {
  height: 100vh;
  overflow-y: auto;
  outline: none;
  scroll-behavior: smooth;
}

.page-scroll.scroll-locked {
  overflow: hidden;
}

/* === Header === */
.header {
  position: sticky;
  top: 0;
  z-index: 100;
  background: rgba(15, 15, 18, 0.92);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
  padding: 1rem 2rem;
  transition: transform var(--transition-normal);
}

.header.header-hidden {
  transform: translateY(-100%);
}

.header-top {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 0.75rem;
}

.site-title {
  font-size: var(--text-xl);
  font-weight: 700;
  letter-spacing: 0.02em;
}

.site-nav a {
  color: var(--text-secondary);
  text-decoration: none;
  margin-left: 1.25rem;
  font-size: var(--text-sm);
}

.site-nav a:hover,
.site-nav .active a {
  color: var(--accent);
}

/* === Search === */
.search-bar {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 0.75rem;
}

.search-input-wrapper {
  flex: 1;
  display: flex;
  align-items: center;
  gap: 0.5rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 999px;
  padding: 0.25rem 0.25rem 0.25rem 1rem;
}

.search-input-wrapper:focus-within {
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-glow);
}

.search-input {
  flex: 1;
  background: transparent;
  border: none;
  outline: none;
  color: var(--text-primary);
  font-size: var(--text-base);
}

.search-btn {
  background: var(--accent);
  border: none;
  border-radius: 999px;
  color: #fff;
  padding: 0.4rem 1.1rem;
}

.prompt-count {
  color: var(--text-muted);
  font-size: var(--text-sm);
  white-space: nowrap;
}

/* === Category Bar === */
.categories {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.category-tag {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 999px;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  padding: 0.3rem 0.85rem;
  transition: all var(--transition-fast);
}

.category-tag:hover {
  border-color: var(--accent);
  color: var(--text-primary);
}

.category-tag.active {
  background: var(--accent);
  border-color: var(--accent);
  color: #fff;
}

.category-tag.toggle-btn {
  background: transparent;
  color: var(--accent);
}

/* === Loading === */
.loading {
  text-align: center;
  padding: 4rem 0;
  color: var(--text-muted);
}

.loading.failed {
  color: var(--danger);
}

.spinner {
  display: inline-block;
  width: 18px;
  height: 18px;
  border: 2px solid var(--border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
  vertical-align: middle;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Gallery === */
.gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.25rem;
  padding: 1.5rem 2rem 4rem;
}

.gallery.hidden,
.no-results.hidden {
  display: none;
}

.card {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 12px;
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-fast), border-color var(--transition-fast);
}

.card:hover {
  transform: translateY(-3px);
  border-color: var(--accent);
}

.card-image {
  width: 100%;
  aspect-ratio: 1 / 1;
  object-fit: cover;
  background: var(--bg-hover);
  display: block;
}

.card-content {
  padding: 0.9rem 1rem 1rem;
}

.card-title {
  font-size: var(--text-base);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.card-tags,
.modal-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.35rem;
}

.card-tag,
.modal-tag {
  background: var(--bg-hover);
  border-radius: 6px;
  color: var(--text-secondary);
  font-size: var(--text-xs);
  padding: 0.15rem 0.5rem;
}

.no-results {
  text-align: center;
  padding: 5rem 0;
  color: var(--text-muted);
}

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  background: rgba(5, 5, 8, 0.85);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
}

.modal-content {
  position: relative;
  display: grid;
  grid-template-columns: minmax(0, 1fr) minmax(0, 1fr);
  gap: 1.5rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 14px;
  max-width: 1000px;
  width: 100%;
  max-height: 90vh;
  overflow: hidden;
  padding: 1.5rem;
}

.modal-image {
  width: 100%;
  max-height: calc(90vh - 3rem);
  object-fit: contain;
  border-radius: 10px;
  background: var(--bg-hover);
}

.modal-info {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  overflow-y: auto;
}

.modal-title {
  font-size: var(--text-xl);
  font-weight: 700;
  padding-right: 2rem;
}

.modal-prompt {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  white-space: pre-wrap;
  word-break: break-word;
  background: var(--bg);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 1rem;
}

.modal-close {
  position: absolute;
  top: 0.75rem;
  right: 0.9rem;
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-muted);
  font-size: var(--text-xl);
  line-height: 1;
  padding: 0.25rem 0.5rem;
  transition: color var(--transition-fast);
}

.icon-btn:hover {
  color: var(--text-primary);
}

/* === Buttons === */
.btn-primary {
  align-self: flex-start;
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  background: var(--accent);
  border: none;
  border-radius: 8px;
  color: #fff;
  font-size: var(--text-sm);
  padding: 0.55rem 1.2rem;
  transition: background var(--transition-fast);
}

.btn-primary.success {
  background: var(--success);
}

.btn-primary.failure {
  background: var(--danger);
}

.btn-ghost {
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 8px;
  color: var(--text-secondary);
  padding: 0.4rem 1rem;
}

/* === Back To Top === */
.back-to-top {
  position: fixed;
  right: 2rem;
  bottom: 2rem;
  width: 44px;
  height: 44px;
  border-radius: 50%;
  background: var(--accent);
  color: #fff;
  font-size: var(--text-lg);
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal);
  z-index: 200;
}

.back-to-top.visible {
  opacity: 1;
  pointer-events: auto;
}

/* === Wiki Viewer === */
.wiki-layout {
  display: flex;
  height: 100vh;
}

.wiki-sidebar {
  width: var(--sidebar-width);
  flex-shrink: 0;
  border-right: 1px solid var(--border);
  background: var(--bg-raised);
  overflow-y: auto;
  padding: 1rem 0;
}

.wiki-sidebar-title {
  font-size: var(--text-lg);
  font-weight: 700;
  padding: 0 1.25rem 0.75rem;
}

.wiki-sidebar-back {
  padding: 0 1.25rem 1rem;
  font-size: var(--text-sm);
}

.wiki-sidebar-back a {
  color: var(--text-muted);
  text-decoration: none;
}

.nav-item {
  display: block;
  width: 100%;
  text-align: left;
  background: transparent;
  border: none;
  border-left: 3px solid transparent;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  padding: 0.45rem 1.25rem;
}

.nav-item:hover {
  background: var(--bg-hover);
  color: var(--text-primary);
}

.nav-item.active {
  border-left-color: var(--accent);
  color: var(--accent);
  background: var(--bg-hover);
}

.wiki-content {
  position: relative;
  flex: 1;
}

.content-frame {
  width: 100%;
  height: 100%;
  border: none;
  background: #fff;
  transition: opacity var(--transition-normal);
}

.content-frame.loading {
  opacity: 0.3;
}

.loading-overlay {
  position: absolute;
  inset: 0;
  display: none;
  align-items: center;
  justify-content: center;
  background: rgba(15, 15, 18, 0.6);
}

.loading-overlay.visible {
  display: flex;
}

/* === Responsive === */
@media (max-width: 768px) {
  .header { padding: 0.75rem 1rem; }
  .gallery { padding: 1rem; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); }
  .modal-content { grid-template-columns: 1fr; overflow-y: auto; }
  .wiki-sidebar { display: none; }
}
"#;
