pub const PAGE_CSS: &str = r#"
    @keyframes bounce {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(6px); }
    }
    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    * { box-sizing: border-box; }
    html { scroll-behavior: smooth; }
    body { margin: 0; }

    .geo-page {
        min-height: 100vh;
        background: #fafaf9;
        font-family: 'DM Sans', -apple-system, sans-serif;
        color: #1c1917;
        line-height: 1.6;
    }
    .progress-bar {
        position: fixed;
        top: 0;
        left: 0;
        height: 3px;
        background: linear-gradient(90deg, #0ea5e9, #a855f7, #f43f5e);
        z-index: 100;
        transition: width 0.1s ease-out;
    }

    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        position: relative;
        padding: 2rem;
        overflow: hidden;
    }
    .hero-content {
        max-width: 900px;
        text-align: center;
        position: relative;
        z-index: 1;
    }
    .hero-eyebrow {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 0.8rem;
        font-weight: 500;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: #a855f7;
        margin-bottom: 2rem;
        padding: 0.5rem 1rem;
        background: rgba(168, 85, 247, 0.08);
        border-radius: 100px;
    }
    .hero-title {
        font-family: 'Newsreader', Georgia, serif;
        font-size: clamp(2.25rem, 6vw, 4rem);
        font-weight: 500;
        line-height: 1.15;
        color: #0c0a09;
        margin: 0;
    }
    .hero-title em {
        font-style: italic;
        color: #78716c;
    }
    .hero-line {
        width: 80px;
        height: 2px;
        background: linear-gradient(90deg, #0ea5e9, #a855f7);
        margin: 2rem auto;
        border-radius: 2px;
    }
    .hero-subtitle {
        font-size: 1.15rem;
        color: #57534e;
        max-width: 550px;
        margin: 0 auto 3rem;
    }
    .hero-summary-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1rem;
        max-width: 700px;
        margin: 0 auto 3rem;
    }
    .hero-summary-card {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        padding: 1.25rem 0.75rem;
        background: #fff;
        border-radius: 12px;
        box-shadow: 0 1px 3px rgba(0,0,0,0.04), 0 4px 12px rgba(0,0,0,0.03);
        border: 1px solid #f5f5f4;
    }
    .hero-summary-icon {
        margin-bottom: 0.75rem;
    }
    .hero-summary-text {
        display: flex;
        flex-direction: column;
        gap: 0.25rem;
    }
    .hero-summary-title {
        font-family: 'Newsreader', Georgia, serif;
        font-size: 1.1rem;
        font-weight: 500;
        color: #1c1917;
        margin: 0;
    }
    .hero-summary-items {
        font-size: 0.75rem;
        color: #78716c;
        margin: 0;
        line-height: 1.4;
    }
    .scroll-hint {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        font-size: 0.85rem;
        color: #a8a29e;
        margin-top: 2rem;
    }
    .scroll-hint svg {
        animation: bounce 2s infinite;
    }
    .hero-glow {
        position: absolute;
        top: 20%;
        left: 50%;
        transform: translateX(-50%);
        width: 600px;
        height: 600px;
        background: radial-gradient(circle, rgba(168, 85, 247, 0.06) 0%, transparent 60%);
        pointer-events: none;
    }

    .section-label {
        font-size: 0.75rem;
        font-weight: 600;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        color: #a855f7;
        margin-bottom: 1.5rem;
    }
    .stakes-section {
        padding: 6rem 2rem;
        background: #0c0a09;
    }
    .stakes-inner {
        max-width: 900px;
        margin: 0 auto;
        text-align: center;
    }
    .stakes-text {
        font-family: 'Newsreader', Georgia, serif;
        font-size: clamp(1.5rem, 4vw, 2.25rem);
        font-weight: 400;
        color: #fafaf9;
        line-height: 1.4;
        margin: 0;
    }

    .framework-section {
        padding: 6rem 2rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .framework-header {
        text-align: center;
        margin-bottom: 4rem;
    }
    .framework-intro {
        font-size: 1.1rem;
        color: #78716c;
        max-width: 600px;
        margin: 0 auto;
    }
    .pillars-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 1.5rem;
    }
    .pillar-card {
        background: #fff;
        border-radius: 16px;
        padding: 2rem;
        box-shadow: 0 1px 3px rgba(0,0,0,0.04), 0 4px 12px rgba(0,0,0,0.03);
        border: 1px solid #f5f5f4;
        cursor: pointer;
        transition: all 0.3s ease;
        animation: fadeIn 0.6s ease-out both;
    }
    .pillar-header {
        display: flex;
        gap: 1rem;
        margin-bottom: 1rem;
    }
    .pillar-icon {
        width: 52px;
        height: 52px;
        border-radius: 12px;
        display: flex;
        align-items: center;
        justify-content: center;
        flex-shrink: 0;
    }
    .pillar-meta {
        display: flex;
        flex-direction: column;
        justify-content: center;
    }
    .pillar-label {
        font-size: 0.7rem;
        font-weight: 600;
        letter-spacing: 0.1em;
        margin-bottom: 0.25rem;
    }
    .pillar-title {
        font-family: 'Newsreader', Georgia, serif;
        font-size: 1.25rem;
        font-weight: 500;
        margin: 0;
        color: #1c1917;
    }
    .pillar-question {
        font-size: 0.95rem;
        color: #78716c;
        font-style: italic;
        margin: 0;
        line-height: 1.5;
    }
    .pillar-actions {
        overflow: hidden;
        transition: all 0.4s ease;
        max-height: 0;
        opacity: 0;
        margin-top: 0;
    }
    .pillar-actions.expanded {
        max-height: 500px;
        opacity: 1;
        margin-top: 1.5rem;
    }
    .actions-divider {
        width: 40px;
        height: 2px;
        border-radius: 1px;
        margin-bottom: 1rem;
    }
    .actions-label {
        font-size: 0.7rem;
        font-weight: 600;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: #a8a29e;
        margin-bottom: 0.75rem;
    }
    .action-item {
        display: flex;
        gap: 0.75rem;
        font-size: 0.9rem;
        color: #44403c;
        margin-bottom: 0.75rem;
        line-height: 1.5;
    }
    .action-arrow {
        flex-shrink: 0;
        margin-top: 3px;
    }
    .expand-btn {
        background: none;
        border: none;
        font-size: 0.8rem;
        font-weight: 500;
        cursor: pointer;
        margin-top: 1rem;
        padding: 0;
    }

    .monitor-section {
        padding: 6rem 2rem;
        background: linear-gradient(180deg, #f5f5f4 0%, #fafaf9 100%);
    }
    .monitor-content {
        max-width: 1000px;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 3rem;
        align-items: center;
    }
    .monitor-quote {
        font-family: 'Newsreader', Georgia, serif;
        font-size: clamp(1.5rem, 3vw, 2rem);
        font-weight: 500;
        font-style: italic;
        color: #0c0a09;
        margin: 0 0 1.5rem 0;
        padding-left: 1.5rem;
        border-left: 3px solid #22c55e;
    }
    .monitor-body {
        font-size: 1rem;
        color: #57534e;
        line-height: 1.7;
        margin: 0;
    }
    .monitor-card {
        background: #fff;
        border-radius: 16px;
        padding: 2rem;
        box-shadow: 0 1px 3px rgba(0,0,0,0.04), 0 8px 24px rgba(0,0,0,0.04);
        border: 1px solid #f5f5f4;
    }
    .monitor-item {
        padding: 0.5rem 0;
    }
    .monitor-label {
        font-size: 0.7rem;
        font-weight: 600;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: #22c55e;
    }
    .monitor-value {
        font-family: 'Newsreader', Georgia, serif;
        font-size: 1.1rem;
        color: #1c1917;
        margin: 0.5rem 0 0 0;
    }
    .monitor-divider {
        height: 1px;
        background: #f5f5f4;
        margin: 1rem 0;
    }

    .closing-section {
        padding: 6rem 2rem;
        background: #0c0a09;
        text-align: center;
    }
    .closing-title {
        font-family: 'Newsreader', Georgia, serif;
        font-size: clamp(1.5rem, 4vw, 2.25rem);
        font-weight: 400;
        color: #fafaf9;
        max-width: 700px;
        margin: 0 auto;
        line-height: 1.4;
    }

    .footer {
        padding: 2rem;
        text-align: center;
        border-top: 1px solid rgba(255,255,255,0.08);
        background: #0c0a09;
    }
    .footer-text {
        font-size: 0.8rem;
        color: #57534e;
        margin: 0;
    }
"#;
