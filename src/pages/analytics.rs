//! Analytics Page
//!
//! Snapshot figures rendered from fixed sample data; no backend endpoint
//! exists for analytics yet.

use leptos::prelude::*;

use crate::components::MetricCard;

struct TrendPoint {
    date: &'static str,
    opportunities: u32,
    applications: u32,
    won: u32,
}

const TREND: &[TrendPoint] = &[
    TrendPoint { date: "Jan 1", opportunities: 10, applications: 3, won: 1 },
    TrendPoint { date: "Jan 2", opportunities: 12, applications: 4, won: 1 },
    TrendPoint { date: "Jan 3", opportunities: 15, applications: 5, won: 2 },
    TrendPoint { date: "Jan 4", opportunities: 14, applications: 4, won: 1 },
    TrendPoint { date: "Jan 5", opportunities: 18, applications: 6, won: 2 },
    TrendPoint { date: "Jan 6", opportunities: 20, applications: 7, won: 2 },
    TrendPoint { date: "Jan 7", opportunities: 22, applications: 8, won: 3 },
];

const PLATFORM_SPLIT: &[(&str, u32)] = &[
    ("Upwork", 45),
    ("LinkedIn", 30),
    ("Toptal", 25),
];

const BUDGET_BUCKETS: &[(&str, u32)] = &[
    ("$0-1k", 5),
    ("$1k-2k", 12),
    ("$2k-5k", 18),
    ("$5k-10k", 8),
    ("$10k+", 3),
];

/// Analytics page with metric cards and distribution tables
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <div class="page analytics-page">
            <h1>"Analytics"</h1>

            <div class="metric-grid">
                <MetricCard label="Success rate" value="75%" change="↑ 5%"/>
                <MetricCard label="Average budget" value="$2,500" change="↑ $200"/>
                <MetricCard label="Total revenue" value="$15,000" change="↑ $3,000"/>
                <MetricCard label="Avg response time" value="2.5h" change="↓ 0.5h"/>
            </div>

            <section class="analytics-section">
                <h2>"7-day trend"</h2>
                <table class="analytics-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Opportunities"</th>
                            <th>"Applications"</th>
                            <th>"Won"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {TREND.iter().map(|point| view! {
                            <tr>
                                <td>{point.date}</td>
                                <td>{point.opportunities}</td>
                                <td>{point.applications}</td>
                                <td>{point.won}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </section>

            <div class="analytics-columns">
                <section class="analytics-section">
                    <h2>"Platform split"</h2>
                    <table class="analytics-table">
                        <tbody>
                            {PLATFORM_SPLIT.iter().map(|(name, share)| view! {
                                <tr>
                                    <td>{*name}</td>
                                    <td>{format!("{share}%")}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </section>

                <section class="analytics-section">
                    <h2>"Budget distribution"</h2>
                    <table class="analytics-table">
                        <tbody>
                            {BUDGET_BUCKETS.iter().map(|(range, count)| view! {
                                <tr>
                                    <td>{*range}</td>
                                    <td>{*count}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </section>
            </div>
        </div>
    }
}
