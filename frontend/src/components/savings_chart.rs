use std::error::Error;

use yew::prelude::*;
use web_sys::HtmlCanvasElement;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;

const MONTHLY_SAVINGS: [(&str, u32); 6] = [
    ("Jan", 450),
    ("Feb", 680),
    ("Mar", 920),
    ("Apr", 1150),
    ("May", 1580),
    ("Jun", 2100),
];

struct Goal {
    name: &'static str,
    current: u32,
    target: u32,
    color: &'static str,
}

const GOALS: [Goal; 3] = [
    Goal { name: "Emergency Fund", current: 7500, target: 10000, color: "#10b981" },
    Goal { name: "Vacation", current: 2800, target: 5000, color: "#06b6d4" },
    Goal { name: "New Laptop", current: 1200, target: 1500, color: "#8b5cf6" },
];

const STREAK_DAYS: usize = 7;
const STREAK_DONE: usize = 5;

fn percent(current: u32, target: u32) -> u32 {
    if target == 0 {
        return 0;
    }
    current * 100 / target
}

fn rupees(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("₹{}", out)
}

fn draw_savings(canvas: HtmlCanvasElement) -> Result<(), Box<dyn Error>> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas backend unavailable")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let max = MONTHLY_SAVINGS.iter().map(|(_, amount)| *amount).max().unwrap_or(0);
    let emerald = RGBColor(16, 185, 129);

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0..MONTHLY_SAVINGS.len() - 1, 0..max + max / 10)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(MONTHLY_SAVINGS.len())
        .x_label_formatter(&|x| {
            MONTHLY_SAVINGS
                .get(*x)
                .map(|(month, _)| month.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| format!("₹{}", y))
        .draw()?;

    chart.draw_series(
        AreaSeries::new(
            MONTHLY_SAVINGS.iter().enumerate().map(|(i, (_, amount))| (i, *amount)),
            0,
            emerald.mix(0.2),
        )
        .border_style(emerald.stroke_width(3)),
    )?;

    root.present()?;
    Ok(())
}

#[function_component(SavingsChart)]
pub fn savings_chart() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                canvas.set_width(600);
                canvas.set_height(300);
                if let Err(e) = draw_savings(canvas) {
                    log::error!("Failed to draw savings chart: {}", e);
                }
            }
            || ()
        }, ());
    }

    html! {
        <section id="progress" class="progress">
            <div class="section-heading">
                <span class="section-tag">{"Track Your Progress"}</span>
                <h2>{"Visualize Your "}<span class="gradient-text">{"Financial Growth"}</span></h2>
                <p>{"Beautiful dashboards that make tracking your savings journey motivating and insightful."}</p>
            </div>

            <div class="progress__grid">
                <div class="progress-card">
                    <div class="progress-card__header">
                        <h3>{"Savings Overview"}</h3>
                        <span class="trend">{"📈 +32% this month"}</span>
                    </div>
                    <canvas ref={canvas_ref} width="600" height="300" style="max-width: 100%;" />
                </div>

                <div class="progress-card">
                    <h3>{"Your Goals"}</h3>
                    { for GOALS.iter().map(|goal| {
                        let pct = percent(goal.current, goal.target);
                        html! {
                            <div class="goal">
                                <div class="goal__row">
                                    <span>{ goal.name }</span>
                                    <span class="goal__amount">
                                        { format!("{} / {}", rupees(goal.current), rupees(goal.target)) }
                                    </span>
                                </div>
                                <div class="goal__track">
                                    <div class="goal__fill"
                                        style={format!("width: {}%; background: {};", pct, goal.color)}>
                                    </div>
                                </div>
                                <span class="goal__percent">{ format!("{}% complete", pct) }</span>
                            </div>
                        }
                    }) }

                    <div class="streak">
                        <div class="streak__text">
                            <span class="streak__title">{"🔥 You're on fire!"}</span>
                            <span>{ format!("{} days in a row", STREAK_DONE) }</span>
                        </div>
                        <div class="streak__days">
                            { for (0..STREAK_DAYS).map(|day| html! {
                                <div class={classes!("streak__day", (day < STREAK_DONE).then_some("done"))}></div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .progress {
                    padding: 6rem 2rem;
                    background: #f8fafc;
                    color: #0f172a;
                }

                .progress__grid {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .progress-card {
                    background: #fff;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.06);
                }

                .progress-card h3 {
                    margin-bottom: 1rem;
                }

                .progress-card__header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .trend {
                    color: #10b981;
                    font-size: 0.9rem;
                }

                .goal {
                    margin-bottom: 1.25rem;
                }

                .goal__row {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.9rem;
                    margin-bottom: 0.4rem;
                }

                .goal__amount,
                .goal__percent {
                    color: #64748b;
                    font-size: 0.8rem;
                }

                .goal__track {
                    height: 0.6rem;
                    border-radius: 9999px;
                    background: #e2e8f0;
                    overflow: hidden;
                }

                .goal__fill {
                    height: 100%;
                    border-radius: 9999px;
                    transition: width 1s ease-out;
                }

                .streak {
                    margin-top: 2rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(90deg, #fff7ed, #fef3c7);
                }

                .streak__text {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.9rem;
                }

                .streak__title {
                    font-weight: 600;
                }

                .streak__days {
                    display: flex;
                    gap: 0.4rem;
                    margin-top: 0.75rem;
                }

                .streak__day {
                    flex: 1;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #e2e8f0;
                }

                .streak__day.done {
                    background: #f97316;
                }

                @media (max-width: 900px) {
                    .progress__grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
