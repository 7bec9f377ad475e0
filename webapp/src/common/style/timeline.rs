pub const TIMELINE_STYLES: &str = r#"
/* Project timeline */
.timeline {
  position: relative;
  max-width: 56rem;
  margin: var(--space-12) auto 0 auto;
  padding: var(--space-12) 0;
}

/* the spine */
.timeline::before {
  content: "";
  position: absolute;
  top: 0;
  bottom: 0;
  left: 50%;
  width: 2px;
  transform: translateX(-50%);
  background-color: var(--border);
}

.timeline-item {
  position: relative;
  display: flex;
  align-items: flex-start;
  min-height: 100px;
  margin-bottom: var(--space-24);
  padding: 0 var(--space-4);
}

.timeline-item.left { flex-direction: row; }
.timeline-item.right { flex-direction: row-reverse; }

.timeline-year {
  position: absolute;
  top: var(--space-6);
  font-size: 3rem;
  font-weight: 700;
  color: var(--year-watermark);
  transition: opacity var(--transition-slow) ease-out;
}

.timeline-item.left .timeline-year { right: 0; padding-right: var(--space-8); }
.timeline-item.right .timeline-year { left: 0; padding-left: var(--space-8); }

.timeline-bubble {
  position: absolute;
  top: 0;
  left: 50%;
  z-index: 1;
  width: 48px;
  height: 48px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  color: white;
  font-size: 0.625rem;
  font-weight: 700;
  box-shadow: var(--shadow-lg);
  transition: transform 500ms ease-out, opacity 500ms ease-out;
}

.timeline-bubble.hidden { transform: translateX(-50%) scale(0.5); opacity: 0; }
.timeline-bubble.shown { transform: translateX(-50%) scale(1); opacity: 1; }

.timeline-content {
  width: 41.666%;
}

.timeline-card {
  margin-top: var(--space-8);
  padding: var(--space-5);
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  border-top: 4px solid var(--primary);
  box-shadow: var(--shadow-md);
  transition: box-shadow var(--transition-normal);
}

.timeline-item.right .timeline-card { border-top-color: var(--accent); }

.timeline-card:hover {
  box-shadow: var(--shadow-xl);
}

.timeline-card h3 {
  font-size: 1.125rem;
  font-weight: 700;
  color: var(--primary);
  margin-bottom: var(--space-2);
}

.dark .timeline-card h3 {
  color: var(--primary-light);
}

.timeline-card .description {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
  overflow: hidden;
  display: -webkit-box;
  -webkit-line-clamp: 3;
  -webkit-box-orient: vertical;
}

.timeline-media {
  position: relative;
  height: 160px;
  margin-bottom: var(--space-4);
  overflow: hidden;
  border-radius: var(--radius-md);
  box-shadow: var(--shadow-sm);
}

.timeline-media img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-slow);
}

.timeline-media:hover img {
  transform: scale(1.05);
}

.timeline-media iframe {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  border: 0;
}

.timeline-card .chip-list {
  margin: var(--space-4) 0 var(--space-3) 0;
}

.timeline-links {
  display: flex;
  gap: var(--space-4);
  margin-top: var(--space-4);
  padding-top: var(--space-3);
  border-top: 1px solid var(--border);
}

.timeline-links a {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
  font-size: 0.875rem;
  font-weight: 500;
}

.timeline-links a.youtube {
  color: #EF4444;
}

.timeline-date {
  margin-top: var(--space-2);
  padding: 0 var(--space-1);
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--text-tertiary);
}

.timeline-item.right .timeline-date { text-align: right; }

.timeline-today {
  position: relative;
  text-align: center;
}

.timeline-today .dot {
  position: absolute;
  top: 0;
  left: 50%;
  width: 12px;
  height: 12px;
  transform: translateX(-50%);
  border-radius: var(--radius-full);
  background-color: var(--marker);
}

.timeline-today .label {
  display: inline-block;
  margin-top: var(--space-4);
  font-size: 0.875rem;
  font-weight: 500;
}

@media (max-width: 768px) {
  .timeline-year { display: none; }
  .timeline-content { width: 100%; }
  .timeline-item { padding: 0; }
}
"#;
