//! Global CSS styles for Stall Gallery.
//!
//! Warm artisan-market palette: kraft paper, linen, terracotta accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Paper */
  --paper: #fbf6ee;
  --linen: #f5e6d3;
  --kraft: #c9a27a;

  /* Ink */
  --text-primary: #3d3229;
  --text-secondary: #6b5d4d;
  --text-muted: #9a8a78;

  /* Accents */
  --terracotta: #c8643b;
  --sage: #8a9a6b;
  --tape: rgba(240, 225, 180, 0.85);

  /* Typography */
  --font-display: 'Fraunces', Georgia, serif;
  --font-body: 'Outfit', 'Helvetica Neue', sans-serif;

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

body {
  font-family: var(--font-body);
  background: var(--paper);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

.stall {
  outline: none;
  min-height: 100vh;
}

/* === Header === */
.stall-header {
  text-align: center;
  padding: 3rem 1.5rem 2rem;
}

.stall-title {
  font-family: var(--font-display);
  font-size: 2.75rem;
  color: var(--terracotta);
}

.stall-tagline {
  color: var(--text-secondary);
  margin: 0.5rem 0 1.5rem;
}

.category-filter {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
}

.category-filter__label {
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.category-filter__select {
  font-family: var(--font-body);
  font-size: 1rem;
  padding: 0.5rem 1rem;
  border: 2px dashed var(--kraft);
  border-radius: 0.5rem;
  background: var(--linen);
  color: var(--text-primary);
  cursor: pointer;
}

/* === Gallery Grid === */
.stall-main {
  padding: 0 2rem 4rem;
}

.gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(230px, 1fr));
  gap: 2.5rem 2rem;
  max-width: 1200px;
  margin: 0 auto;
}

.gallery__message {
  text-align: center;
  color: var(--text-muted);
  padding: 2rem;
  grid-column: 1 / -1;
}

/* === Photo Cards === */
@keyframes card-enter {
  from {
    opacity: 0;
    transform: translateY(24px) rotate(var(--rotation, 0deg));
  }
  to {
    opacity: 1;
    transform: translateY(0) rotate(var(--rotation, 0deg));
  }
}

.photo-card {
  position: relative;
  background: white;
  padding: 0.75rem 0.75rem 1rem;
  box-shadow: 0 6px 18px rgba(61, 50, 41, 0.15);
  transform: rotate(var(--rotation, 0deg));
  animation: card-enter 0.5s ease both;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.photo-card::before {
  content: '';
  position: absolute;
  top: -12px;
  left: 50%;
  width: 80px;
  height: 24px;
  background: var(--tape);
  transform: translateX(-50%) rotate(var(--tape-rotation, 0deg));
}

.photo-card:hover {
  transform: rotate(0deg) scale(1.03);
  box-shadow: 0 12px 28px rgba(61, 50, 41, 0.22);
  z-index: 1;
}

.photo-card.hidden {
  display: none;
}

.photo-card img {
  width: 100%;
  aspect-ratio: 1;
  object-fit: cover;
  display: block;
  background: var(--linen);
}

.photo-caption h3 {
  font-family: var(--font-display);
  font-size: 1.1rem;
  margin-top: 0.75rem;
  text-transform: capitalize;
}

.photo-category {
  display: inline-block;
  margin-top: 0.35rem;
  padding: 0.1rem 0.6rem;
  font-size: 0.75rem;
  color: white;
  background: var(--sage);
  border-radius: 999px;
  transform: rotate(var(--badge-rotation, 0deg));
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(30, 24, 19, 0.85);
  z-index: 100;
  padding: 2rem;
}

.lightbox.hidden {
  display: none;
}

.lightbox-frame {
  position: relative;
  background: white;
  padding: 1rem 1rem 1.5rem;
  max-width: min(90vw, 960px);
  max-height: 90vh;
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.4);
}

.lightbox-frame img {
  display: block;
  max-width: 100%;
  max-height: calc(90vh - 6rem);
  margin: 0 auto;
}

.lightbox-caption {
  font-family: var(--font-display);
  font-size: 1.4rem;
  text-align: center;
  margin-top: 0.75rem;
  text-transform: capitalize;
}

.lightbox-close {
  position: absolute;
  top: -1rem;
  right: -1rem;
  width: 2.5rem;
  height: 2.5rem;
  border: none;
  border-radius: 50%;
  background: var(--terracotta);
  color: white;
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.lightbox-close:hover {
  transform: scale(1.1);
}
"#;
