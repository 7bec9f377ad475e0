pub const HOME_STYLES: &str = r#"
/* Page sections */
.page {
  min-height: 100vh;
  background-color: var(--background);
  color: var(--text-primary);
  transition: background-color 200ms, color 200ms;
}

.page-main {
  padding-top: var(--space-24);
}

.section {
  padding: var(--space-16) 0;
  scroll-margin-top: var(--space-16);
}

.section-alt {
  background-color: var(--background-alt);
}

.section-title {
  font-size: 1.875rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: var(--space-8);
  color: var(--text-primary);
}

.section-lead {
  max-width: 42rem;
  margin: 0 auto var(--space-12) auto;
  text-align: center;
  font-size: 1.125rem;
  color: var(--text-secondary);
}

/* Header */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  z-index: 40;
  padding: var(--space-4) 0;
  background-color: var(--header);
  color: var(--text-inverse);
  box-shadow: var(--shadow-md);
  transition: padding var(--transition-normal), box-shadow var(--transition-normal);
}

.site-header.scrolled {
  padding: var(--space-2) 0;
  box-shadow: var(--shadow-lg);
  background-color: rgba(30, 41, 59, 0.95);
  backdrop-filter: blur(4px);
}

.header-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  display: block;
  background-color: var(--header-raised);
  border: 1px solid transparent;
  border-radius: var(--radius-md);
  color: var(--text-inverse);
  font-weight: 700;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal),
              border-color var(--transition-normal);
}

.logo:hover {
  transform: scale(1.05);
  text-decoration: none;
  box-shadow: 0 10px 15px -3px rgba(245, 158, 11, 0.3);
  border-color: #FBBF24;
}

.dark .logo:hover {
  box-shadow: 0 10px 15px -3px rgba(59, 130, 246, 0.3);
  border-color: #60A5FA;
}

.logo-small {
  font-size: 1.25rem;
  padding: var(--space-1) var(--space-2);
}

.logo-medium {
  font-size: 1.5rem;
  padding: var(--space-2) var(--space-3);
}

.nav-links {
  display: flex;
  gap: var(--space-2);
}

.nav-link {
  color: var(--neutral-300);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  transition: color var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-inverse);
  background-color: var(--header-raised);
  text-decoration: none;
}

/* Hero */
.hero {
  min-height: 80vh;
  display: flex;
  align-items: center;
  text-align: center;
}

.hero-title {
  font-size: clamp(2.25rem, 6vw, 3.75rem);
  font-weight: 700;
  margin-bottom: var(--space-6);
}

.hero-title .highlight {
  color: var(--primary);
}

.hero-subtitle {
  font-size: clamp(1.25rem, 3vw, 1.5rem);
  color: var(--text-secondary);
  margin-bottom: var(--space-10);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
}

/* About */
.about-grid {
  max-width: var(--content-width);
  margin: 0 auto;
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: var(--space-6);
}

.profile-card {
  max-width: var(--content-width);
  margin: 0 auto var(--space-6) auto;
  display: flex;
  flex-wrap: wrap;
}

.profile-photo {
  position: relative;
  flex: 1 1 200px;
  max-width: 280px;
}

.profile-photo img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.profile-photo .caption {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: var(--space-2);
  color: white;
  font-weight: 700;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
}

.profile-body {
  flex: 3 1 320px;
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  padding: var(--space-5);
}

.profile-bio {
  flex: 2 1 240px;
}

.profile-bio p {
  font-size: 0.875rem;
  color: var(--text-secondary);
  margin: var(--space-2) 0 var(--space-4) 0;
}

.profile-facts {
  flex: 1 1 160px;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.profile-facts .fact {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  overflow: hidden;
  text-overflow: ellipsis;
}

.social-row {
  display: flex;
  gap: var(--space-3);
  margin-top: var(--space-3);
}

.social-row a {
  color: var(--text-tertiary);
}

.social-row a:hover {
  color: var(--text-primary);
}

.about-card {
  padding: var(--space-6);
}

.experience-item {
  border-left: 2px solid var(--primary);
  padding: var(--space-1) 0 var(--space-1) var(--space-4);
  margin-bottom: var(--space-4);
}

.experience-item h4 {
  font-weight: 500;
}

.experience-meta {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: var(--space-1);
}

.experience-meta .company {
  color: var(--primary);
}

.experience-meta .period,
.experience-item p {
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.skill-category {
  margin-bottom: var(--space-4);
}

.skill-category h4 {
  font-size: 0.875rem;
  font-weight: 500;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-tertiary);
  margin-bottom: var(--space-2);
}

.skill-category .chip {
  font-size: 0.875rem;
  padding: var(--space-1) var(--space-3);
}

.skill-category .chip:hover {
  background-color: rgba(59, 130, 246, 0.2);
}

/* Contact */
.contact-grid {
  max-width: var(--content-width);
  margin: 0 auto;
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: var(--space-8);
}

.contact-form {
  padding: var(--space-6);
}

.contact-channels h3 {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.channel {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  padding: var(--space-4);
  margin-bottom: var(--space-4);
  border-radius: var(--radius-lg);
  color: white;
  font-size: 1.125rem;
  transition: transform var(--transition-normal);
}

.channel:hover {
  transform: scale(1.05);
  text-decoration: none;
}

.channel-github { background-color: var(--neutral-800); }
.channel-linkedin { background-color: #1D4ED8; }
.channel-email { background-color: var(--primary); }

/* Resume preview */
.resume-frame {
  display: block;
  width: 100%;
  height: min(70vh, 680px);
  border: 0;
}

.site-footer {
  padding: var(--space-8) 0;
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-tertiary);
}
"#;
