pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #2563EB;          /* Primary brand blue */
  --primary-light: #60A5FA;    /* Lighter blue for hover states */
  --primary-dark: #1D4ED8;     /* Darker blue for active states */
  --accent: #6366F1;           /* Indigo, used for right-hand timeline cards */
  --marker: #EF4444;           /* The "Today" dot */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Semantic Colors */
  --success: #10B981;
  --error: #EF4444;

  /* Background and Surface Colors */
  --background: var(--neutral-100);
  --background-alt: var(--neutral-50);
  --surface: #FFFFFF;
  --surface-muted: var(--neutral-100);
  --header: #1E293B;
  --header-raised: #334155;

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-700);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;
  --year-watermark: var(--neutral-200);

  /* Border Colors */
  --border: var(--neutral-300);
  --border-focus: var(--primary);

  /* Layout */
  --header-height: 72px;
  --container-width: 1280px;
  --content-width: 64rem;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;
  --space-24: 96px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-slow: 700ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* toggled on the document root by the theme provider */
:root.dark {
  --background: var(--neutral-900);
  --background-alt: #0B1120;
  --surface: var(--neutral-800);
  --surface-muted: var(--neutral-700);

  --text-primary: #F9FAFB;
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);
  --year-watermark: var(--neutral-700);

  --border: var(--neutral-600);
  --primary-light: #93C5FD;
}
"#;
