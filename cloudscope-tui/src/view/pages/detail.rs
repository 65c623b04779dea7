//! 资源详情页面视图

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use cloudscope_provider::{DetailData, ResourceDetail};

use crate::model::Session;
use crate::view::theme::status_color;

/// 渲染资源详情页面
pub fn render(session: &Session, frame: &mut Frame, area: Rect) {
    let Some(detail) = &session.detail else {
        return;
    };

    let Some(record) = &detail.record else {
        // 记录还没到达
        let content = vec![
            Line::from(""),
            Line::styled("  Loading detail…", Style::default().fg(Color::Gray)),
        ];
        frame.render_widget(Paragraph::new(content), area);
        return;
    };

    let mut lines = vec![Line::from("")];

    lines.push(field("Id", &record.id));
    lines.push(field("Name", &record.name));
    lines.push(field(
        "Zone",
        &record
            .zone
            .map_or_else(|| "global".to_string(), |z| z.to_string()),
    ));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {:<14}", "Status"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            record.status.to_string(),
            Style::default()
                .fg(status_color(record.status))
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    if let Some(created) = record.created_at {
        lines.push(field("Created", &created.format("%Y-%m-%d %H:%M:%S UTC").to_string()));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("  ── {} ──", record.data.kind().label()),
        Style::default().fg(Color::DarkGray),
    ));
    lines.push(Line::from(""));
    lines.extend(attribute_lines(record));

    frame.render_widget(Paragraph::new(lines), area);
}

/// 类型特有属性的字段行
fn attribute_lines(record: &ResourceDetail) -> Vec<Line<'static>> {
    match &record.data {
        DetailData::Instance {
            cpu_cores,
            memory_mb,
            image,
            private_ip,
            public_ip,
        } => vec![
            field("CPU cores", &cpu_cores.to_string()),
            field("Memory", &format!("{memory_mb} MiB")),
            field("Image", image),
            field("Private IP", private_ip.as_deref().unwrap_or("-")),
            field("Public IP", public_ip.as_deref().unwrap_or("-")),
        ],
        DetailData::Volume {
            size_gb,
            volume_type,
            attached_to,
        } => vec![
            field("Size", &format!("{size_gb} GiB")),
            field("Type", volume_type),
            field("Attached to", attached_to.as_deref().unwrap_or("-")),
        ],
        DetailData::Network {
            cidr_block,
            subnet_count,
        } => vec![
            field("CIDR block", cidr_block),
            field("Subnets", &subnet_count.to_string()),
        ],
        DetailData::LoadBalancer {
            scheme,
            listener_ports,
            target_count,
        } => {
            let ports = listener_ports
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            vec![
                field("Scheme", scheme),
                field("Listeners", &ports),
                field("Targets", &target_count.to_string()),
            ]
        }
        DetailData::Bucket {
            object_count,
            size_bytes,
            versioning,
        } => vec![
            field("Objects", &object_count.to_string()),
            field("Size", &format_bytes(*size_bytes)),
            field("Versioning", if *versioning { "enabled" } else { "disabled" }),
        ],
        DetailData::Alert {
            severity,
            condition,
            firing,
        } => vec![
            field("Severity", severity),
            field("Condition", condition),
            field("Firing", if *firing { "yes" } else { "no" }),
        ],
    }
}

/// 生成 `  标签    值` 形式的字段行
fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {label:<14}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

/// 字节数转人类可读格式
fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
