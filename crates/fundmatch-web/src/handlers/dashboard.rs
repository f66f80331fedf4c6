//! Dashboard handler — admin landing page rendering the cached metrics.
//!
//! The page is static HTML; metric cards are filled in client-side from
//! /dashboard/metrics and refreshed every 30 seconds.

use axum::response::Html;

pub async fn dashboard_home() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Fundmatch — Admin Dashboard</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; background: #f5f5f5; color: #333; line-height: 1.6; }
        .header { background: #2c3e50; color: white; padding: 1rem 2rem; }
        .header h1 { font-size: 1.5rem; font-weight: 600; }
        .header .subtitle { opacity: 0.8; font-size: 0.9rem; }
        .container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
        .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 1.5rem; }
        .card { background: white; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.05); overflow: hidden; }
        .card-header { background: #34495e; color: white; padding: 0.75rem 1.25rem; font-weight: 600; }
        .card-content { padding: 1.25rem; }
        .metric { display: flex; justify-content: space-between; padding: 0.5rem 0; border-bottom: 1px solid #eee; }
        .metric:last-child { border-bottom: none; }
        .metric-label { color: #555; }
        .metric-value { font-weight: 600; color: #2c3e50; }
        .controls { margin-bottom: 1.5rem; }
        .btn { padding: 0.6rem 1.2rem; border: none; border-radius: 4px; cursor: pointer; font-weight: 500; background: #3498db; color: white; margin-right: 0.5rem; text-decoration: none; display: inline-block; }
        .btn:hover { background: #2980b9; }
        .error { background: #fff5f5; border: 1px solid #fed7d7; color: #c53030; padding: 0.75rem; border-radius: 4px; }
        .timestamp { font-size: 0.8rem; color: #666; text-align: right; margin-top: 1rem; }
    </style>
</head>
<body>
    <div class="header">
        <h1>Fundmatch</h1>
        <div class="subtitle">Admin Dashboard — Matching Pipeline Metrics</div>
    </div>
    <div class="container">
        <div class="controls">
            <button class="btn" onclick="refreshDashboard()">Refresh</button>
            <button class="btn" onclick="control('clear_cache')">Clear Cache</button>
            <a class="btn" href="/dashboard/export">Export</a>
            <a class="btn" href="/health/detailed" target="_blank">Health</a>
        </div>
        <div id="content"><div class="card"><div class="card-content">Loading dashboard data...</div></div></div>
    </div>
    <script>
        function card(title, rows) {
            const body = rows.map(([label, value]) =>
                `<div class="metric"><span class="metric-label">${label}</span><span class="metric-value">${value}</span></div>`
            ).join('');
            return `<div class="card"><div class="card-header">${title}</div><div class="card-content">${body}</div></div>`;
        }

        function section(snapshot, title, rows) {
            if (snapshot.error) {
                return `<div class="card"><div class="card-header">${title}</div><div class="card-content"><div class="error">${snapshot.error}</div></div></div>`;
            }
            return card(title, rows(snapshot));
        }

        function render(data) {
            const html = [
                section(data.system_overview, 'System Overview', s => [
                    ['Total Matches', s.overview.total_matches],
                    ['Total Ideas', s.overview.total_ideas],
                    ['Collaborator Suggestions', s.overview.total_collaborator_suggestions],
                    ['Notifications', s.overview.total_notifications],
                    ['Recent Matches (7d)', s.overview.recent_matches_7d],
                    ['Health', s.system_health.status],
                ]),
                section(data.agent_performance, 'Agent Performance', s => [
                    ['Avg Match Score', s.matcher_agent.avg_score.toFixed(3)],
                    ['High Quality Matches', s.matcher_agent.high_quality_matches],
                    ['Avg Innovation', s.idea_agent.avg_innovation_score.toFixed(3)],
                    ['Avg Relevance', s.collaborator_agent.avg_relevance_score.toFixed(3)],
                    ['Notification Success', (s.notification_agent.success_rate * 100).toFixed(1) + '%'],
                ]),
                section(data.recommendation_effectiveness, 'Effectiveness (30d)', s => [
                    ['Matches', s.effectiveness_by_period.last_30_days.total_matches],
                    ['Avg Score', s.effectiveness_by_period.last_30_days.avg_score.toFixed(3)],
                    ['Response Rate', (s.effectiveness_by_period.last_30_days.response_rate * 100).toFixed(1) + '%'],
                    ['Volume Trend', s.trends.match_volume_trend],
                ]),
                section(data.research_insights, 'Research Insights', s => [
                    ['Top Research Area', s.insights.most_active_research_area],
                    ['Common Methodology', s.insights.most_common_methodology],
                    ['Dominant Career Stage', s.insights.dominant_career_stage],
                    ['Avg Feasibility', s.idea_quality_metrics.avg_feasibility_score.toFixed(3)],
                ]),
            ].join('');
            document.getElementById('content').innerHTML =
                `<div class="grid">${html}</div><div class="timestamp">Last updated: ${new Date(data.generated_at).toLocaleString()}</div>`;
        }

        async function refreshDashboard() {
            try {
                const response = await fetch('/dashboard/metrics');
                const data = await response.json();
                if (response.ok) { render(data); }
                else { showError(data.message || 'Unknown error'); }
            } catch (err) {
                showError(err.message);
            }
        }

        async function control(action) {
            await fetch('/dashboard/controls', {
                method: 'POST',
                headers: {'Content-Type': 'application/json'},
                body: JSON.stringify({action})
            });
            refreshDashboard();
        }

        function showError(message) {
            document.getElementById('content').innerHTML =
                `<div class="error">Failed to load dashboard: ${message}</div>`;
        }

        refreshDashboard();
        setInterval(refreshDashboard, 30000);
    </script>
</body>
</html>
"#;
