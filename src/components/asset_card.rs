//! Asset Card Component
//!
//! Single knowledge asset with its quality score and reuse count.

use leptos::prelude::*;

use crate::format;
use crate::models::KnowledgeAsset;

/// One knowledge asset in the grid
#[component]
pub fn AssetCard(asset: KnowledgeAsset) -> impl IntoView {
    view! {
        <div class="asset-card">
            <div class="card-header">
                <h3>{asset.title}</h3>
                <span class="asset-type">{asset.asset_type}</span>
            </div>
            <div class="asset-stats">
                <div class="stat">
                    <span class="stat-label">"Quality:"</span>
                    <span class="stat-value">{format::percent(asset.quality_score)}</span>
                </div>
                <div class="stat">
                    <span class="stat-label">"Reused:"</span>
                    <span class="stat-value">{asset.reuse_count}</span>
                </div>
            </div>
        </div>
    }
}
