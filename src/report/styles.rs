/// Stylesheet embedded in the generated page.
pub fn inline_css() -> &'static str {
    r#"
body {
    font-family: Arial, sans-serif;
    margin: 40px;
    background: #f5f5f5;
    color: #1a1a1a;
}

h1, h2, h3 {
    color: #003366;
}

.teams {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    margin-bottom: 24px;
}

.team {
    background: #ffffff;
    border: 1px solid #c8d3de;
    border-radius: 6px;
    padding: 12px 16px;
    min-width: 280px;
}

.team h3 {
    margin: 0 0 8px 0;
}

.team p {
    margin: 4px 0;
}

.label {
    font-weight: bold;
    color: #003366;
}

.placeholder, .unavailable {
    color: #777777;
    font-style: italic;
}

.live {
    color: #b00020;
    font-weight: bold;
}

ul.games li {
    margin-bottom: 4px;
}

table.standings {
    border-collapse: collapse;
    margin-bottom: 20px;
    background: #ffffff;
}

table.standings th {
    background-color: #003366;
    color: white;
}

table.standings td, table.standings th {
    border: 1px solid #999999;
    padding: 6px 10px;
    text-align: center;
}

table.standings td.team-name {
    text-align: left;
}

table.standings tr.tracked {
    background: #fff4cc;
    font-weight: bold;
}

footer {
    margin-top: 32px;
    font-size: 0.9em;
    color: #555555;
}
"#
}
