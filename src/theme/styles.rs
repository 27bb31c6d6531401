//! Global CSS styles for the complaint site.
//!
//! Light banking look with a red brand accent. Class names match the
//! components in `ouvidoria-ui` and the sections in `crate::components`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BRAND */
  --primary: #cc092f;
  --primary-dark: #a00725;
  --primary-light: #fde8ec;
  --primary-foreground: #ffffff;

  /* SURFACES */
  --background: #ffffff;
  --muted: #f4f4f6;
  --border: #e4e4e7;

  /* TEXT */
  --foreground: #1a1a2e;
  --text-muted: #6b7280;

  /* SEMANTIC */
  --destructive: #dc2626;
  --success: #16a34a;

  /* Gradients */
  --gradient-primary: linear-gradient(135deg, var(--primary) 0%, var(--primary-dark) 100%);
  --gradient-hero: linear-gradient(135deg, #cc092f 0%, #8b0620 60%, #1a1a2e 100%);
  --gradient-card: linear-gradient(180deg, #ffffff 0%, var(--muted) 100%);

  /* Shadows */
  --shadow-card: 0 4px 12px rgba(26, 26, 46, 0.08);
  --shadow-elegant: 0 10px 30px -10px rgba(204, 9, 47, 0.25);
  --shadow-button: 0 4px 14px rgba(204, 9, 47, 0.35);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, -apple-system, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-3xl: 1.875rem;
  --text-5xl: 3rem;

  /* Radii */
  --radius: 0.5rem;
  --radius-lg: 1rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

ul {
  list-style: none;
}

.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1rem;
}

.container-narrow {
  max-width: 42rem;
}

section[id], div[id] {
  scroll-margin-top: 5rem;
}

/* === Icons === */
.icon {
  display: inline-block;
  flex-shrink: 0;
  vertical-align: middle;
}

.spin {
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

@keyframes fade-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Buttons === */
.btn-primary,
.btn-outline,
.btn-hero,
.btn-hero-outline,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  font: inherit;
  font-weight: 600;
  border-radius: var(--radius);
  cursor: pointer;
  transition: all var(--transition-normal);
  border: 1px solid transparent;
  padding: 0.625rem 1.25rem;
}

.btn-primary {
  background: var(--gradient-primary);
  color: var(--primary-foreground);
}

.btn-primary:hover:not(:disabled) {
  box-shadow: var(--shadow-button);
  transform: translateY(-1px);
}

.btn-outline {
  background: transparent;
  border-color: var(--border);
  color: var(--foreground);
}

.btn-outline:hover:not(:disabled) {
  background: var(--muted);
}

.btn-hero {
  background: #ffffff;
  color: var(--primary);
  box-shadow: var(--shadow-button);
  padding: 0.875rem 2rem;
  font-size: var(--text-lg);
}

.btn-hero:hover {
  transform: scale(1.05);
}

.btn-hero-outline {
  background: transparent;
  border-color: #ffffff;
  color: #ffffff;
  padding: 0.875rem 2rem;
  font-size: var(--text-lg);
}

.btn-hero-outline:hover {
  background: #ffffff;
  color: var(--primary);
}

.btn-ghost {
  background: transparent;
  color: var(--foreground);
}

button:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  background: transparent;
  border: none;
  border-radius: var(--radius);
  color: var(--foreground);
  cursor: pointer;
}

.icon-btn:hover {
  background: var(--muted);
}

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(4px);
  border-bottom: 1px solid var(--border);
  box-shadow: var(--shadow-card);
}

.header-bar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-top: 1rem;
  padding-bottom: 1rem;
}

.brand {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.wordmark {
  font-size: var(--text-2xl);
  font-weight: 800;
  letter-spacing: -0.02em;
  color: var(--primary);
}

.wordmark-inverted {
  display: block;
  color: #ffffff;
  margin-bottom: 1rem;
}

.brand-title {
  font-size: var(--text-xl);
  font-weight: 700;
}

.brand-subtitle {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.desktop-nav {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.nav-link {
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--primary);
}

.secure-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  background: var(--primary-light);
  color: var(--foreground);
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  font-size: var(--text-sm);
  font-weight: 500;
  width: fit-content;
}

.secure-badge .icon {
  color: var(--primary);
}

.menu-toggle {
  display: none;
}

.mobile-menu {
  display: none;
  flex-direction: column;
  gap: 0.75rem;
  padding-top: 1rem;
  padding-bottom: 1rem;
  border-top: 1px solid var(--border);
  animation: fade-in var(--transition-normal);
}

/* === Hero === */
.hero {
  position: relative;
  background: var(--gradient-hero);
  color: var(--primary-foreground);
  padding: 5rem 0 6rem;
  text-align: center;
}

.hero-inner {
  max-width: 56rem;
  position: relative;
}

.hero-title {
  font-size: var(--text-5xl);
  font-weight: 800;
  line-height: 1.1;
  margin-bottom: 1.5rem;
  animation: fade-in 600ms ease;
}

.hero-title-accent {
  display: block;
  color: rgba(255, 255, 255, 0.9);
}

.hero-subtitle {
  font-size: var(--text-xl);
  color: rgba(255, 255, 255, 0.9);
  max-width: 42rem;
  margin: 0 auto 2rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
  margin-bottom: 3rem;
}

.hero-stats {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
  max-width: 48rem;
  margin: 0 auto;
}

.hero-stat {
  background: rgba(255, 255, 255, 0.1);
  backdrop-filter: blur(4px);
  border-radius: var(--radius);
  padding: 1.5rem;
}

.hero-stat-icon {
  display: inline-flex;
  background: rgba(255, 255, 255, 0.2);
  border-radius: 9999px;
  padding: 0.75rem;
  margin-bottom: 1rem;
}

.hero-stat-value {
  font-size: var(--text-2xl);
  font-weight: 700;
}

.hero-stat-label {
  color: rgba(255, 255, 255, 0.8);
}

.hero-wave {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  color: var(--background);
  line-height: 0;
}

.hero-wave svg {
  width: 100%;
  height: 3rem;
}

/* === Sections === */
.section-heading {
  text-align: center;
  margin-bottom: 2rem;
}

.section-heading h2 {
  font-size: var(--text-3xl);
  font-weight: 700;
  margin-bottom: 1rem;
}

.section-heading p {
  color: var(--text-muted);
  max-width: 42rem;
  margin: 0 auto;
}

/* === Cards === */
.card {
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-card);
  transition: all var(--transition-normal);
}

.card-header {
  padding: 1.5rem 1.5rem 0.75rem;
}

.card-title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.card-description {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.card-content {
  padding: 0.75rem 1.5rem 1.5rem;
}

/* === Complaint Form === */
.form-section {
  padding: 4rem 0;
  background: rgba(244, 244, 246, 0.3);
}

.form-card {
  box-shadow: var(--shadow-elegant);
}

.step-heading {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 0.75rem;
}

.step-title {
  font-size: var(--text-sm);
  font-weight: 400;
  color: var(--text-muted);
}

.progress-track {
  width: 100%;
  height: 0.5rem;
  background: var(--muted);
  border-radius: 9999px;
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: var(--gradient-primary);
  transition: width var(--transition-normal);
}

.step-fields {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
  animation: fade-in var(--transition-normal);
}

.field-email,
.field-phone,
.field-complaintType,
.field-description {
  grid-column: 1 / -1;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 500;
}

.required-mark {
  color: var(--destructive);
}

.input-field,
.textarea-field,
.select-field {
  width: 100%;
  font: inherit;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--background);
  color: var(--foreground);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus,
.textarea-field:focus,
.select-field:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 3px var(--primary-light);
}

.textarea-field {
  min-height: 8rem;
  resize: vertical;
}

.has-error {
  border-color: var(--destructive);
}

.field-error {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  color: var(--destructive);
  font-size: var(--text-sm);
}

.field-footer {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: 1rem;
}

.char-counter {
  color: var(--text-muted);
  font-size: var(--text-sm);
  white-space: nowrap;
}

.form-actions {
  display: flex;
  justify-content: space-between;
  padding-top: 1.5rem;
}

.form-actions-end {
  margin-left: auto;
}

/* === Credibility === */
.credibility {
  padding: 4rem 0;
}

.feature-grid,
.process-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 1.5rem;
}

.feature-grid {
  margin-bottom: 4rem;
}

.feature-card {
  text-align: center;
}

.feature-card:hover,
.process-card:hover {
  transform: translateY(-4px);
  box-shadow: var(--shadow-elegant);
}

.icon-bubble {
  display: inline-flex;
  padding: 0.75rem;
  border-radius: 9999px;
  background: var(--primary-light);
  color: var(--primary);
  margin-bottom: 1rem;
}

.icon-bubble-soft {
  background: rgba(204, 9, 47, 0.1);
}

.stats-panel {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 2rem;
  background: var(--gradient-card);
  border-radius: var(--radius-lg);
  padding: 2rem;
  margin-bottom: 4rem;
  box-shadow: var(--shadow-elegant);
  text-align: center;
}

.stat-value {
  font-size: var(--text-3xl);
  font-weight: 700;
}

.stat-label {
  font-size: var(--text-lg);
  font-weight: 600;
}

.stat-sublabel {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.process-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  text-align: center;
  margin-bottom: 2rem;
}

.process-item {
  position: relative;
}

.process-card {
  height: 100%;
}

.process-head {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.process-number {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  background: var(--gradient-primary);
  color: var(--primary-foreground);
  font-weight: 700;
  font-size: var(--text-lg);
}

.process-time {
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--primary);
}

.process-connector {
  position: absolute;
  top: 50%;
  right: -0.75rem;
  width: 1.5rem;
  height: 2px;
  background: rgba(204, 9, 47, 0.3);
}

.badges {
  margin-top: 4rem;
  text-align: center;
}

.badges h4 {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 1.5rem;
}

.badge-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 2rem;
  opacity: 0.6;
}

.trust-badge {
  background: var(--muted);
  border-radius: var(--radius);
  padding: 0.75rem 1.5rem;
  font-size: var(--text-sm);
  font-weight: 500;
}

/* === Footer === */
.site-footer {
  background: var(--foreground);
  color: var(--background);
  padding: 3rem 0;
}

.footer-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 2rem;
}

.footer-title,
.footer-heading {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 1rem;
}

.footer-text {
  color: rgba(255, 255, 255, 0.8);
  font-size: var(--text-sm);
}

.footer-list {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  font-size: var(--text-sm);
}

.footer-link {
  color: rgba(255, 255, 255, 0.8);
  transition: color var(--transition-fast);
}

.footer-link:hover,
.legal-link:hover {
  color: #ffffff;
}

.contact-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.contact-item {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
}

.contact-icon {
  color: var(--primary);
  margin-top: 0.2rem;
}

.socials {
  margin-top: 1.5rem;
}

.socials h5 {
  font-weight: 600;
  margin-bottom: 0.75rem;
}

.social-row {
  display: flex;
  gap: 1rem;
}

.social-link {
  display: inline-flex;
  padding: 0.5rem;
  border-radius: var(--radius);
  background: rgba(255, 255, 255, 0.1);
  transition: background var(--transition-fast);
}

.social-link:hover {
  background: rgba(255, 255, 255, 0.2);
}

.footer-bottom {
  border-top: 1px solid rgba(255, 255, 255, 0.2);
  margin-top: 2rem;
  padding-top: 2rem;
}

.footer-bottom-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: center;
  gap: 1rem;
}

.copyright {
  font-size: var(--text-sm);
  color: rgba(255, 255, 255, 0.6);
}

.legal-links {
  display: flex;
  flex-wrap: wrap;
  gap: 1.5rem;
  font-size: var(--text-sm);
}

.legal-link {
  color: rgba(255, 255, 255, 0.6);
}

.legal-text {
  margin-top: 1.5rem;
  font-size: var(--text-xs);
  color: rgba(255, 255, 255, 0.5);
}

.legal-text p + p {
  margin-top: 0.5rem;
}

/* === Scroll To Top === */
.scroll-to-top {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 40;
  display: inline-flex;
  padding: 0.75rem;
  border-radius: 9999px;
  background: var(--gradient-primary);
  color: var(--primary-foreground);
  box-shadow: var(--shadow-button);
  transition: transform var(--transition-fast);
}

.scroll-to-top:hover {
  transform: translateY(-2px);
}

/* === Toasts === */
.toast-viewport {
  position: fixed;
  right: 1rem;
  bottom: 5rem;
  z-index: 100;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  max-width: 24rem;
  width: calc(100% - 2rem);
}

.toast {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  padding: 1rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--background);
  box-shadow: var(--shadow-elegant);
  animation: fade-in var(--transition-normal);
}

.toast-success .toast-icon {
  color: var(--success);
}

.toast-error {
  background: var(--destructive);
  border-color: var(--destructive);
  color: #ffffff;
}

.toast-body {
  flex: 1;
}

.toast-title {
  font-weight: 600;
  font-size: var(--text-sm);
}

.toast-description {
  font-size: var(--text-sm);
  opacity: 0.9;
}

.toast-close {
  background: transparent;
  border: none;
  color: inherit;
  cursor: pointer;
  opacity: 0.7;
}

.toast-close:hover {
  opacity: 1;
}

/* === Not Found === */
.not-found {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--muted);
}

.not-found-card {
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.not-found-card h1 {
  font-size: var(--text-5xl);
  font-weight: 800;
  color: var(--primary);
}

/* === Responsive === */
@media (max-width: 1024px) {
  .feature-grid,
  .process-grid,
  .stats-panel,
  .footer-grid {
    grid-template-columns: repeat(2, 1fr);
  }

  .process-connector {
    display: none;
  }
}

@media (max-width: 768px) {
  .brand-text,
  .desktop-nav {
    display: none;
  }

  .menu-toggle {
    display: inline-flex;
  }

  .mobile-menu {
    display: flex;
  }

  .hero-title {
    font-size: 2.25rem;
  }

  .hero-stats,
  .feature-grid,
  .process-grid,
  .stats-panel,
  .footer-grid,
  .step-fields {
    grid-template-columns: 1fr;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::colors;

    #[test]
    fn stylesheet_defines_brand_palette() {
        for color in colors::ALL {
            assert!(GLOBAL_STYLES.contains(color), "missing {color}");
        }
    }

    #[test]
    fn anchors_scroll_smoothly() {
        assert!(GLOBAL_STYLES.contains("scroll-behavior: smooth"));
    }
}
