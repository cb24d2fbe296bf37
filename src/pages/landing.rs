use chrono::Datelike;
use yew::prelude::*;

use crate::components::depth_text::DepthText;
use crate::components::glow_capture::GlowCapture;
use crate::components::lead_modal::LeadModal;
use crate::components::reveal::Reveal;
use crate::effects::reveal::RevealMotion;

struct IncludeCard {
    title: &'static str,
    desc: &'static str,
}

const INCLUDE_CARDS: &[IncludeCard] = &[
    IncludeCard {
        title: "8 מפגשים פיזיים",
        desc: "3-3.5 שעות כל אחד בסלון ברמת גן, בקבוצה קטנה מאוד (6-8 נשים).",
    },
    IncludeCard {
        title: "מסגרת עבודה ברורה",
        desc: "כל מפגש בנוי כך שיש פוקוס, זמן עבודה אמיתי, ותוצר מחייב בסוף.",
    },
    IncludeCard {
        title: "3-4 מפגשי Execution",
        desc: "מפגשים שבהם פשוט בונים: קוד / מוצר / תשתית / תוכן - כולן באותו חלל.",
    },
    IncludeCard {
        title: "מנטורים מהשורה הראשונה",
        desc: "יושבים איתך בזמן אמת: שואלים, מפצחים ומקדמים.",
    },
    IncludeCard {
        title: "קבוצה שמחזיקה אותך",
        desc: "נשים רציניות שבאו לבנות + קבוצת ווצאפ להתייעצות גם בין המפגשים.",
    },
];

const OUTCOMES: &[&str] = &[
    "כיוון ברור למיזם אחד",
    "החלטות שהפסיקו להידחות",
    "משהו קיים בעולם: מוצר, פיילוט, בטא, או התחלה של השקה",
    "משתמשות / לקוחות ראשונים או תהליך לקראתם",
    "תחושה (מבוססת מציאות) שאת מסוגלת להחזיק עשייה לאורך זמן",
];

// Stagger between consecutive cards and rows, in seconds.
const STAGGER: f64 = 0.06;

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal_open = use_state(|| false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("Opening lead form");
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    let year = chrono::Local::now().year();

    html! {
        <div dir="rtl" class="landing">
            <style>{LANDING_CSS}</style>

            <div class="top-bar">
                <div class="top-bar__inner">
                    <GlowCapture class={classes!("glow-pill")} glow_size={240.0}>
                        <button class="btn btn--small" onclick={open_modal.clone()}>
                            {"הצטרפי לInner Circle"}
                        </button>
                    </GlowCapture>

                    <div class="brand-mark">
                        <span class="text-brand">{"HERSALON"}</span>{" "}
                        <span class="muted">{"|"}</span>{" "}
                        <span class="brand-mark__sub">{"Inner Circle"}</span>
                    </div>
                </div>
            </div>

            <section class="hero">
                <div class="container hero__inner">
                    <Reveal>
                        <DepthText text="HERSALON" class={classes!("hero__title")} />
                        <div class="hero__second">
                            <DepthText
                                text="Inner Circle"
                                class={classes!("hero__subtitle", "text-brand")}
                                scroll_range={620.0}
                            />
                        </div>

                        <div class="hero__lead">
                            <div>{"אם הגעת לכאן את כנראה כבר מבינה דבר אחד"}</div>
                            {"הרעיון שלך לא תקוע בגלל חוסר ידע"}
                            <div class="hero__punch">{"הוא תקוע כי אין לו מרחב קבוע שבו הוא קורה"}</div>
                        </div>

                        <div class="hero__cta">
                            <GlowCapture class={classes!("glow-round")} glow_size={320.0}>
                                <button class="btn btn--large btn--round" onclick={open_modal.clone()}>
                                    {"לקביעת שיחת התאמה"}
                                    <span class="btn__arrow">{"←"}</span>
                                </button>
                            </GlowCapture>
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="includes">
                <div class="container includes__inner">
                    <Reveal>
                        <div class="section-title">{"מה התהליך כולל?"}</div>
                        <div class="section-sub">{"את מקבלת מעטפת מלאה לעשייה בפועל"}</div>
                    </Reveal>

                    <div class="includes__grid">
                        { for INCLUDE_CARDS.iter().enumerate().map(|(i, card)| html! {
                            <Reveal key={card.title} motion={RevealMotion::default().delayed(i as f64 * STAGGER)}>
                                <GlowCapture class={classes!("card")} glow_color="rgba(91,79,228,0.45)" glow_size={260.0}>
                                    <div class="card__head">
                                        <div class="card__icon">{"✦"}</div>
                                        <div class="card__title">{card.title}</div>
                                    </div>
                                    <div class="card__desc">{card.desc}</div>
                                </GlowCapture>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="outcomes">
                <div class="container outcomes__grid">
                    <Reveal>
                        <div class="outcomes__media">
                            <img src="/hero4.png" alt="" />
                        </div>
                    </Reveal>

                    <Reveal motion={RevealMotion::default().delayed(0.05)}>
                        <div class="section-title">{"מה את מקבלת בסוף התהליך?"}</div>
                        <div class="outcomes__sub">{"כל אחת מגדירה לעצמה את נקודת הסיום הנחשקת"}</div>

                        <div class="outcomes__list">
                            { for OUTCOMES.iter().enumerate().map(|(i, outcome)| html! {
                                <Reveal key={*outcome} class={classes!("outcome")} motion={RevealMotion::slide(i as f64 * STAGGER)}>
                                    <div class="outcome__mark">{"✦"}</div>
                                    <div class="outcome__text">{*outcome}</div>
                                </Reveal>
                            }) }
                        </div>

                        <div class="outcomes__note">
                            {"לא כולן יוצאות באותו שלב אבל אף אחת לא נשארת תקועה"}
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="pricing">
                <div class="pricing__inner">
                    <Reveal>
                        <div class="pricing__card">
                            <div class="section-title">{"מחיר והרשמה"}</div>

                            <div class="pricing__tiers">
                                <div>
                                    <div class="muted">{"הרשמה מוקדמת"}</div>
                                    <div class="price text-brand">{"₪7,000"}</div>
                                </div>
                                <div class="pricing__late">
                                    <div class="muted">{"הרשמה מאוחרת"}</div>
                                    <div class="price">{"₪8,888"}</div>
                                </div>
                            </div>

                            <div class="pricing__note">
                                <span class="text-brand">{"✦"}</span>
                                {"יש לקבוע שיחת התאמה שכן איכות האנשים והקבוצה והתאמה מדויקת היא קריטית לשם תהליך אפקטיבי."}
                            </div>

                            <div class="pricing__cta">
                                <GlowCapture class={classes!("glow-pill")} glow_size={320.0}>
                                    <button class="btn btn--large" onclick={open_modal.clone()}>
                                        {"לבקשת שיחת התאמה"}
                                    </button>
                                </GlowCapture>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </section>

            <footer class="footer">
                <div class="container footer__inner">
                    { format!("© HERSALON | Inner Circle {} · כל הזכויות שמורות.", year) }
                </div>
            </footer>

            if *modal_open {
                <LeadModal on_close={close_modal} />
            }
        </div>
    }
}

const LANDING_CSS: &str = r#"
.landing {
    min-height: 100vh;
    background: #ffffff;
    color: #0f172a;
    font-family: "Heebo", "Assistant", system-ui, sans-serif;
}

.container {
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.text-brand { color: #5b4fe4; }
.muted { color: #94a3b8; }

/* Buttons */
.btn {
    border: none;
    cursor: pointer;
    background: #5b4fe4;
    color: #ffffff;
    font-weight: 600;
    border-radius: 22px;
    box-shadow: 0 18px 45px rgba(91, 79, 228, 0.28);
    transition: opacity 0.2s ease;
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
}

.btn:hover { opacity: 0.95; }
.btn--small { height: 2.5rem; padding: 0 1.25rem; font-size: 0.875rem; }
.btn--large { height: 4rem; padding: 0 3rem; font-size: 1rem; }
.btn--round { border-radius: 999px; }
.btn__arrow { font-size: 1.25rem; }

/* Glow */
.glow-capture {
    position: relative;
    isolation: isolate;
}

.glow-overlay {
    position: absolute;
    inset: 0;
    border-radius: inherit;
    pointer-events: none;
    z-index: 0;
    opacity: var(--glow-opacity, 0);
    transition: opacity 0.3s ease;
    background: radial-gradient(
        var(--glow-size, 260px) circle at var(--glow-x, 50%) var(--glow-y, 50%),
        var(--glow-color, rgba(91, 79, 228, 0.55)),
        transparent 60%
    );
}

.glow-content {
    position: relative;
    z-index: 1;
}

.glow-pill { display: inline-block; border-radius: 22px; }
.glow-round { display: inline-block; border-radius: 999px; }

/* Top bar */
.top-bar {
    position: sticky;
    top: 0;
    z-index: 40;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid #f1f5f9;
}

.top-bar__inner {
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.brand-mark { font-size: 1.25rem; font-weight: 700; }
.brand-mark__sub { font-weight: 500; }

/* Hero */
.hero { position: relative; }

.hero__inner {
    padding-top: 7rem;
    padding-bottom: 6rem;
    text-align: center;
}

.depth-text {
    position: relative;
    display: inline-block;
}

.depth-text__shadow {
    position: absolute;
    inset: 0;
    pointer-events: none;
    user-select: none;
    font-weight: 800;
    will-change: transform, opacity, filter;
}

.depth-text__main {
    position: relative;
    display: inline-block;
    font-weight: 800;
    will-change: transform;
}

.hero__title { font-size: 4.5rem; line-height: 1; }
.hero__subtitle { font-size: 3.75rem; line-height: 1; }
.hero__second { margin-top: 0.75rem; }

.hero__lead {
    margin: 2.5rem auto 0;
    max-width: 48rem;
    font-size: 1.125rem;
    line-height: 1.625;
    color: #64748b;
}

.hero__punch {
    padding-top: 0.75rem;
    font-size: 1.25rem;
    font-weight: 900;
    color: #000000;
}

.hero__cta {
    margin-top: 3.5rem;
    display: flex;
    justify-content: center;
}

/* Sections */
.section-title {
    font-size: 3rem;
    font-weight: 800;
    line-height: 1.15;
}

.section-sub { margin-top: 1rem; color: #64748b; }

.includes {
    background: #f8fafc;
    border-top: 1px solid #f1f5f9;
    border-bottom: 1px solid #f1f5f9;
}

.includes__inner {
    padding-top: 6rem;
    padding-bottom: 6rem;
    text-align: center;
}

.includes__grid {
    margin-top: 3.5rem;
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 1.5rem;
    text-align: right;
}

.card {
    border-radius: 22px;
    background: #ffffff;
    border: 1px solid #f1f5f9;
    box-shadow: 0 18px 55px rgba(15, 23, 42, 0.10);
    padding: 2rem;
}

.card__head { display: flex; gap: 0.75rem; align-items: center; }

.card__icon {
    height: 2.5rem;
    width: 2.5rem;
    border-radius: 22px;
    background: rgba(91, 79, 228, 0.1);
    color: #5b4fe4;
    font-size: 1.25rem;
    display: flex;
    align-items: center;
    justify-content: center;
}

.card__title { font-size: 1.25rem; font-weight: 700; }
.card__desc { margin-top: 0.75rem; color: #64748b; line-height: 1.625; }

/* Outcomes */
.outcomes { background: #0b1023; color: #ffffff; }

.outcomes__grid {
    padding-top: 6rem;
    padding-bottom: 6rem;
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 2.5rem;
    align-items: center;
}

.outcomes__media {
    overflow: hidden;
    box-shadow: 0 18px 55px rgba(15, 23, 42, 0.10);
}

.outcomes__media img {
    width: 100%;
    min-height: 512px;
    margin-top: 0.75rem;
    object-fit: cover;
}

.outcomes__sub { margin-top: 1rem; color: rgba(255, 255, 255, 0.7); }

.outcomes__list {
    margin-top: 2.5rem;
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
}

.outcome { display: flex; align-items: flex-start; gap: 1rem; }

.outcome__mark {
    height: 1.5rem;
    width: 1.5rem;
    flex-shrink: 0;
    border-radius: 999px;
    background: rgba(91, 79, 228, 0.2);
    border: 1px solid rgba(91, 79, 228, 0.3);
    color: #5b4fe4;
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
}

.outcome__text { min-height: 2.25rem; color: rgba(91, 79, 228, 0.85); font-weight: 600; }

.outcomes__note {
    margin-top: 2.5rem;
    border-radius: 0.5rem;
    background: rgba(91, 79, 228, 0.15);
    padding: 0.75rem 1.5rem;
    font-weight: 900;
}

/* Pricing */
.pricing { background: #f8fafc; }

.pricing__inner {
    display: flex;
    justify-content: center;
    align-items: center;
    padding: 6rem 1.5rem;
}

.pricing__card {
    max-width: 800px;
    border-radius: 22px;
    background: #ffffff;
    border: 1px solid #f1f5f9;
    box-shadow: 0 18px 55px rgba(15, 23, 42, 0.10);
    padding: 3.5rem 5rem;
    text-align: center;
}

.pricing__tiers {
    margin-top: 2.5rem;
    padding: 0 2.5rem;
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 2.5rem;
    align-items: center;
}

.pricing__late { border-right: 1px solid #f1f5f9; }

.price { margin-top: 0.5rem; font-size: 3rem; font-weight: 800; }

.pricing__note {
    margin: 2.5rem 5rem 0;
    border-radius: 22px;
    background: rgba(91, 79, 228, 0.05);
    border: 1px solid rgba(91, 79, 228, 0.1);
    padding: 1.5rem;
    color: #475569;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
}

.pricing__cta { margin-top: 2.5rem; display: flex; justify-content: center; }

.footer { border-top: 1px solid #f1f5f9; background: #ffffff; }

.footer__inner {
    padding-top: 2.5rem;
    padding-bottom: 2.5rem;
    font-size: 0.875rem;
    color: #64748b;
}

/* Lead modal */
.lead-modal {
    position: fixed;
    inset: 0;
    z-index: 50;
    background: rgba(0, 0, 0, 0.45);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}

.lead-modal--open { animation: backdropIn 0.35s cubic-bezier(0.22, 1, 0.36, 1) forwards; }
.lead-modal--open .lead-modal__panel { animation: panelIn 0.35s cubic-bezier(0.22, 1, 0.36, 1) forwards; }
.lead-modal--closing { animation: backdropOut 0.35s cubic-bezier(0.22, 1, 0.36, 1) forwards; }
.lead-modal--closing .lead-modal__panel { animation: panelOut 0.35s cubic-bezier(0.22, 1, 0.36, 1) forwards; }

@keyframes backdropIn { from { opacity: 0; } to { opacity: 1; } }
@keyframes backdropOut { from { opacity: 1; } to { opacity: 0; } }

@keyframes panelIn {
    from { opacity: 0; transform: translateY(18px) scale(0.98); }
    to { opacity: 1; transform: translateY(0) scale(1); }
}

@keyframes panelOut {
    from { opacity: 1; transform: translateY(0) scale(1); }
    to { opacity: 0; transform: translateY(10px) scale(0.98); }
}

.lead-modal__panel {
    width: 100%;
    max-width: 32rem;
    border-radius: 22px;
    background: #ffffff;
    box-shadow: 0 18px 55px rgba(15, 23, 42, 0.10);
    overflow: hidden;
}

.lead-modal__body { padding: 1.75rem; }

.lead-modal__header {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    gap: 1rem;
}

.lead-modal__eyebrow { font-size: 0.875rem; color: #64748b; }
.lead-modal__title { margin-top: 0.25rem; font-size: 1.25rem; font-weight: 700; color: #0f172a; }

.lead-modal__close {
    border: none;
    background: none;
    cursor: pointer;
    color: #94a3b8;
}

.lead-modal__close:hover { color: #334155; }

.lead-modal__fields { margin-top: 1.5rem; display: grid; gap: 0.75rem; }

.lead-input {
    height: 3rem;
    border-radius: 22px;
    border: 1px solid #e2e8f0;
    padding: 0 1rem;
    outline: none;
}

.lead-input:focus { border-color: #5b4fe4; }

.lead-modal__attend {
    margin-top: 0.5rem;
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    font-size: 0.875rem;
    color: #334155;
}

.lead-modal__attend input { margin-top: 0.25rem; accent-color: #5b4fe4; }

.lead-modal__submit {
    margin-top: 0.75rem;
    height: 3rem;
    border: none;
    cursor: pointer;
    border-radius: 22px;
    background: #5b4fe4;
    color: #ffffff;
    font-weight: 600;
    box-shadow: 0 18px 45px rgba(91, 79, 228, 0.28);
    transition: opacity 0.2s ease;
}

.lead-modal__submit:hover { opacity: 0.95; }
.lead-modal__submit:disabled { opacity: 0.4; cursor: not-allowed; }

.lead-modal__ok { font-size: 0.875rem; color: #047857; }
.lead-modal__error { font-size: 0.875rem; color: #be123c; }

@media (max-width: 1024px) {
    .includes__grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .outcomes__grid { grid-template-columns: minmax(0, 1fr); }
}

@media (max-width: 768px) {
    .includes__grid { grid-template-columns: minmax(0, 1fr); }
    .pricing__tiers { grid-template-columns: minmax(0, 1fr); }
    .pricing__late { border-right: none; }
    .pricing__card { padding: 2.5rem; }
    .pricing__note { margin: 2.5rem 0 0; }
}

@media (max-width: 640px) {
    .hero__title { font-size: 3.75rem; }
    .hero__subtitle { font-size: 3rem; }
    .section-title { font-size: 2.25rem; }
    .outcomes__media img { height: 420px; }
}
"#;
