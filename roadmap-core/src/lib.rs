//! Logic lõi cho timeline ra mắt sản phẩm: mô hình sự kiện, vị trí theo ngày,
//! bố cục tránh chồng lấn và trạng thái điều hướng.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Giới hạn phải của một cột năm; marker không bao giờ chạm mép phải.
pub const MAX_MARKER_POSITION: f64 = 0.95;

/// Khoảng cách tối thiểu mặc định giữa hai marker trong cùng cột năm.
pub const DEFAULT_MIN_SPACING: f64 = 0.08;

/// Khoảng năm hiển thị của timeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSpan {
    pub start_year: i32,
    pub end_year: i32,
}

impl Default for TimeSpan {
    fn default() -> Self {
        Self {
            start_year: 2023,
            end_year: 2027,
        }
    }
}

impl TimeSpan {
    /// Năm có nằm trong khoảng hiển thị không.
    pub fn contains(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }

    /// Duyệt các năm theo thứ tự tăng dần.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start_year..=self.end_year
    }

    /// Vị trí chuẩn hoá của một ngày trong cột năm của nó. Trả về `None`
    /// khi năm nằm ngoài khoảng hiển thị, sự kiện đó không được đặt.
    pub fn position(&self, date: NaiveDate) -> Option<f64> {
        if self.contains(date.year()) {
            Some(position_in_year(date))
        } else {
            None
        }
    }
}

/// Cấu hình điều chỉnh khoảng năm và khoảng cách marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapConfig {
    pub span: TimeSpan,
    /// Khoảng cách tối thiểu giữa các marker cột mốc, tính theo phần
    /// của bề rộng cột năm.
    pub min_marker_spacing: f64,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            span: TimeSpan::default(),
            min_marker_spacing: DEFAULT_MIN_SPACING,
        }
    }
}

/// Ba chiều sự kiện, quyết định hàng hiển thị trên timeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Tính năng sản phẩm được phát hành.
    Feature,
    /// Cột mốc của nền tảng.
    Platform,
    /// Cột mốc của ngành.
    Industry,
}

/// Phân hệ sản phẩm của một tính năng.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Module {
    Hiring,
    Goals,
    Core,
    Learning,
    Surveys,
    Analytics,
    #[serde(rename = "Time off")]
    TimeOff,
    Performance,
    #[serde(rename = "Workforce planning")]
    WorkforcePlanning,
    Compensation,
    Payroll,
    Docs,
    Skills,
    #[serde(rename = "Job catalog")]
    JobCatalog,
}

impl Module {
    /// Bảng thứ tự hiển thị cố định, theo ngày tính năng đầu tiên xuất hiện.
    pub const ALL: [Module; 14] = [
        Module::Hiring,
        Module::Goals,
        Module::Core,
        Module::Learning,
        Module::Surveys,
        Module::Analytics,
        Module::TimeOff,
        Module::Performance,
        Module::WorkforcePlanning,
        Module::Compensation,
        Module::Payroll,
        Module::Docs,
        Module::Skills,
        Module::JobCatalog,
    ];

    /// Tên hiển thị của phân hệ.
    pub fn label(&self) -> &'static str {
        match self {
            Module::Hiring => "Hiring",
            Module::Goals => "Goals",
            Module::Core => "Core",
            Module::Learning => "Learning",
            Module::Surveys => "Surveys",
            Module::Analytics => "Analytics",
            Module::TimeOff => "Time Off",
            Module::Performance => "Performance",
            Module::WorkforcePlanning => "Workforce Planning",
            Module::Compensation => "Compensation",
            Module::Payroll => "Payroll",
            Module::Docs => "Documents",
            Module::Skills => "Skills",
            Module::JobCatalog => "Job Catalog",
        }
    }

    /// Tên icon cho phân hệ; phần vẽ icon nằm ở tầng trình bày.
    pub fn icon(&self) -> &'static str {
        match self {
            Module::Hiring => "UserCheck",
            Module::Goals => "Target",
            Module::Core => "Bot",
            Module::Learning => "GraduationCap",
            Module::Surveys => "ClipboardList",
            Module::Analytics => "BarChart3",
            Module::TimeOff => "Calendar",
            Module::Performance => "Award",
            Module::WorkforcePlanning => "TrendingUp",
            Module::Compensation => "DollarSign",
            Module::Payroll => "Wallet",
            Module::Docs => "FileText",
            Module::Skills => "Brain",
            Module::JobCatalog => "Briefcase",
        }
    }

    /// Mô tả ngắn dùng cho tooltip.
    pub fn blurb(&self) -> &'static str {
        match self {
            Module::Hiring => "Recruiting & talent acquisition",
            Module::Goals => "Objectives and key results",
            Module::Core => "Core platform & assistant",
            Module::Learning => "Courses & training",
            Module::Surveys => "Employee surveys",
            Module::Analytics => "Reports & dashboards",
            Module::TimeOff => "Leave management",
            Module::Performance => "Reviews & feedback",
            Module::WorkforcePlanning => "Position management",
            Module::Compensation => "Salary & benefits",
            Module::Payroll => "Payroll processing",
            Module::Docs => "Document management",
            Module::Skills => "Skills management & AI",
            Module::JobCatalog => "Job profiles & families",
        }
    }
}

/// Mức tác động của một sự kiện, chỉ ảnh hưởng độ nhấn khi hiển thị.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(from = "u8", into = "u8")]
pub enum Impact {
    Low = 1,
    Medium = 3,
    High = 5,
}

impl From<u8> for Impact {
    fn from(value: u8) -> Self {
        match value {
            5 => Impact::High,
            3 => Impact::Medium,
            _ => Impact::Low,
        }
    }
}

impl From<Impact> for u8 {
    fn from(impact: Impact) -> Self {
        impact as u8
    }
}

/// Một sự kiện trên timeline, bất biến sau khi nạp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub dimension: Dimension,
    /// Chỉ có nghĩa với chiều tính năng; cột mốc luôn là `None`.
    #[serde(default)]
    pub module: Option<Module>,
    #[serde(default)]
    pub customer_quote: Option<String>,
    #[serde(default)]
    pub internal_reaction: Option<String>,
    #[serde(default)]
    pub feature_screenshot_url: Option<String>,
    #[serde(default)]
    pub reaction_screenshot_url: Option<String>,
    #[serde(default)]
    pub is_flagship: bool,
    #[serde(default)]
    pub is_data_query: bool,
    pub impact_score: Impact,
}

impl Event {
    /// Năm dương lịch của sự kiện.
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// Vị trí chuẩn hoá của một ngày trong năm của nó: 01/01 là 0.0, 31/12 là 1.0.
/// Mẫu số dùng số ngày thật của năm, nên năm nhuận chuẩn hoá theo 366 ngày.
pub fn position_in_year(date: NaiveDate) -> f64 {
    let days_in_year = NaiveDate::from_ymd_opt(date.year(), 12, 31)
        .map_or(365, |last| last.ordinal());
    f64::from(date.ordinal() - 1) / f64::from(days_in_year - 1)
}

/// Chỉ số tháng 0-11 dùng cho lưới 12 cột của chế độ chi tiết năm.
pub fn month_index(date: NaiveDate) -> usize {
    date.month0() as usize
}

/// Chia một danh sách sự kiện vào 12 ô tháng của một năm.
pub fn month_buckets<'a>(events: &[&'a Event], year: i32) -> [Vec<&'a Event>; 12] {
    let mut buckets: [Vec<&'a Event>; 12] = Default::default();
    for &event in events {
        if event.year() == year {
            buckets[month_index(event.date)].push(event);
        }
    }
    buckets
}

/// Gán vị trí cho các marker của một cột năm, đẩy marker sang phải khi nó
/// rơi quá gần một marker đã đặt trước đó trong cùng lượt duyệt. Vị trí
/// cuối bị chặn tại [`MAX_MARKER_POSITION`]; cột năm dày đặc có thể hội tụ
/// tại mép chặn và chồng lên nhau, đây là hành vi chấp nhận được.
///
/// Sự kiện có năm ngoài `span` không xuất hiện trong kết quả.
pub fn spaced_positions(
    events: &[&Event],
    span: TimeSpan,
    min_spacing: f64,
) -> HashMap<String, f64> {
    let mut ordered: Vec<&Event> = events.to_vec();
    ordered.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

    let mut assigned: Vec<f64> = Vec::with_capacity(ordered.len());
    let mut positions = HashMap::with_capacity(ordered.len());

    for event in ordered {
        let Some(natural) = span.position(event.date) else {
            continue;
        };

        let mut candidate = natural;
        for earlier in &assigned {
            if (candidate - earlier).abs() < min_spacing {
                candidate = earlier + min_spacing;
            }
        }

        let placed = candidate.min(MAX_MARKER_POSITION);
        assigned.push(placed);
        positions.insert(event.id.clone(), placed);
    }

    positions
}

/// Kho sự kiện chỉ đọc. Khởi tạo một lần từ dữ liệu đã nạp, sắp xếp theo
/// thời gian rồi truyền tường minh tới nơi sử dụng; mọi phép chiếu đều
/// tính lại từ đầu và không có trạng thái ẩn.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Khởi tạo kho từ danh sách sự kiện đã chuẩn bị sẵn.
    pub fn new(mut events: Vec<Event>) -> Self {
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Self { events }
    }

    /// Toàn bộ sự kiện theo thứ tự thời gian.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Sự kiện thuộc một chiều.
    pub fn by_dimension(&self, dimension: Dimension) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.dimension == dimension)
            .collect()
    }

    /// Sự kiện rơi vào một năm dương lịch.
    pub fn by_year(&self, year: i32) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.year() == year)
            .collect()
    }

    /// Sự kiện gắn với một phân hệ. Tính năng thiếu phân hệ được coi là
    /// chưa phân nhóm: vẫn xuất hiện trong các phép chiếu toàn kho nhưng
    /// không bao giờ xuất hiện ở đây.
    pub fn by_module(&self, module: Module) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.module == Some(module))
            .collect()
    }

    /// Tính năng của một năm trong một phân hệ.
    pub fn features_for(&self, year: i32, module: Module) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| {
                event.dimension == Dimension::Feature
                    && event.year() == year
                    && event.module == Some(module)
            })
            .collect()
    }

    /// Các phân hệ có ít nhất một tính năng, theo thứ tự của bảng
    /// [`Module::ALL`] chứ không theo thứ tự dữ liệu.
    pub fn active_modules(&self) -> Vec<Module> {
        Module::ALL
            .into_iter()
            .filter(|module| {
                self.events.iter().any(|event| {
                    event.dimension == Dimension::Feature && event.module == Some(*module)
                })
            })
            .collect()
    }

    /// Như [`EventStore::active_modules`] nhưng giới hạn trong một năm.
    pub fn active_modules_in(&self, year: i32) -> Vec<Module> {
        Module::ALL
            .into_iter()
            .filter(|module| {
                self.events.iter().any(|event| {
                    event.dimension == Dimension::Feature
                        && event.year() == year
                        && event.module == Some(*module)
                })
            })
            .collect()
    }

    /// Số sự kiện của từng năm trong khoảng hiển thị.
    pub fn counts_by_year(&self, span: TimeSpan) -> Vec<(i32, usize)> {
        span.years()
            .map(|year| (year, self.by_year(year).len()))
            .collect()
    }

    /// Năm có sự kiện chủ lực nào không; đổi kiểu hiển thị tiêu đề năm.
    pub fn has_flagship(&self, year: i32) -> bool {
        self.events
            .iter()
            .any(|event| event.year() == year && event.is_flagship)
    }

    /// Thống kê phần tính năng của một năm cho phần đầu chế độ chi tiết.
    pub fn stats_for(&self, year: i32) -> YearStats {
        let features: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| event.dimension == Dimension::Feature && event.year() == year)
            .collect();

        YearStats {
            features: features.len(),
            modules: self.active_modules_in(year).len(),
            flagship: features.iter().filter(|event| event.is_flagship).count(),
            data_query: features.iter().filter(|event| event.is_data_query).count(),
        }
    }
}

/// Thống kê tính năng của một năm.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearStats {
    pub features: usize,
    pub modules: usize,
    pub flagship: usize,
    pub data_query: usize,
}

/// Lời dẫn tĩnh cho một năm trên hàng tiêu đề.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearInfo {
    pub year: i32,
    pub philosophy: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

const YEAR_CATALOG: &[YearInfo] = &[
    YearInfo {
        year: 2023,
        philosophy: "The assistant era begins",
        subtitle: "Foundation models arrive",
        description: "Large language models reach production quality and the first \
                      wave of workplace AI tools ships.",
    },
    YearInfo {
        year: 2024,
        philosophy: "The AI platform is born",
        subtitle: "First AI features ship",
        description: "Early generative features land in Hiring, Goals and the core \
                      platform to learn what resonates with customers.",
    },
    YearInfo {
        year: 2025,
        philosophy: "AI across every module",
        subtitle: "Natural-language analytics",
        description: "Intelligent features reach every product area and natural \
                      language queries open up people analytics.",
    },
    YearInfo {
        year: 2026,
        philosophy: "From features to a companion",
        subtitle: "Context-aware assistance",
        description: "The assistant understands workplace context and starts helping \
                      proactively across workflows.",
    },
    YearInfo {
        year: 2027,
        philosophy: "The agentic platform",
        subtitle: "Autonomous workflows",
        description: "Autonomous agents and a builder studio let customers compose \
                      their own intelligent workflows.",
    },
];

impl YearInfo {
    /// Bảng lời dẫn cho các năm được hỗ trợ, theo thứ tự hiển thị.
    pub fn catalog() -> &'static [YearInfo] {
        YEAR_CATALOG
    }

    /// Lời dẫn của một năm, nếu có.
    pub fn for_year(year: i32) -> Option<&'static YearInfo> {
        YEAR_CATALOG.iter().find(|info| info.year == year)
    }
}

/// Chế độ hiển thị hiện tại của timeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ViewState {
    /// Tổng quan nhiều năm.
    Overview,
    /// Chi tiết một năm đã chọn.
    YearDetail { year: i32 },
}

impl ViewState {
    /// Năm đang chọn; chỉ có ở chế độ chi tiết.
    pub fn selected_year(&self) -> Option<i32> {
        match self {
            ViewState::Overview => None,
            ViewState::YearDetail { year } => Some(*year),
        }
    }
}

/// Máy trạng thái điều hướng giữa tổng quan và chi tiết năm. Mọi chuyển
/// trạng thái là đồng bộ và nguyên tử; chuyển bị từ chối không đổi gì và
/// không sinh lỗi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    span: TimeSpan,
    state: ViewState,
}

impl Navigator {
    /// Bắt đầu ở chế độ tổng quan.
    pub fn new(span: TimeSpan) -> Self {
        Self {
            span,
            state: ViewState::Overview,
        }
    }

    pub fn span(&self) -> TimeSpan {
        self.span
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn selected_year(&self) -> Option<i32> {
        self.state.selected_year()
    }

    /// Từ tổng quan vào chi tiết một năm. Trả về `true` nếu trạng thái đổi.
    pub fn select_year(&mut self, year: i32) -> bool {
        if self.state == ViewState::Overview && self.span.contains(year) {
            self.state = ViewState::YearDetail { year };
            true
        } else {
            false
        }
    }

    /// Quay về tổng quan.
    pub fn back(&mut self) -> bool {
        match self.state {
            ViewState::YearDetail { .. } => {
                self.state = ViewState::Overview;
                true
            }
            ViewState::Overview => false,
        }
    }

    /// Điều hướng ngang sang một năm khác khi đang ở chế độ chi tiết.
    /// Năm ngoài khoảng hiển thị bị từ chối, nút điều hướng khi đó bị vô
    /// hiệu ở tầng trình bày.
    pub fn change_year(&mut self, year: i32) -> bool {
        match self.state {
            ViewState::YearDetail { year: current }
                if current != year && self.span.contains(year) =>
            {
                self.state = ViewState::YearDetail { year };
                true
            }
            _ => false,
        }
    }

    /// Sang năm liền trước.
    pub fn prev_year(&mut self) -> bool {
        match self.selected_year() {
            Some(year) => self.change_year(year - 1),
            None => false,
        }
    }

    /// Sang năm liền sau.
    pub fn next_year(&mut self) -> bool {
        match self.selected_year() {
            Some(year) => self.change_year(year + 1),
            None => false,
        }
    }

    /// Nút điều hướng tới `year` có nên bật không.
    pub fn can_change_to(&self, year: i32) -> bool {
        matches!(self.state, ViewState::YearDetail { .. }) && self.span.contains(year)
    }
}

/// Marker đã được gán vị trí trong cột năm của nó.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacedMarker {
    pub event: Event,
    pub position: f64,
}

/// Các marker của một cột năm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearMarkers {
    pub year: i32,
    pub markers: Vec<PlacedMarker>,
}

/// Một làn phân hệ trên lưới tổng quan, trải qua mọi cột năm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModuleLane {
    pub module: Module,
    pub years: Vec<YearMarkers>,
}

/// Tóm tắt một năm cho hàng tiêu đề tổng quan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearSummary {
    pub year: i32,
    pub philosophy: String,
    pub subtitle: String,
    pub description: String,
    pub stats: YearStats,
    pub has_flagship: bool,
}

/// Kết quả tổng hợp cuối cùng cho tầng trình bày.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapSnapshot {
    pub generated_at: DateTime<Utc>,
    pub span: TimeSpan,
    pub years: Vec<YearSummary>,
    pub lanes: Vec<ModuleLane>,
    pub platform: Vec<YearMarkers>,
    pub industry: Vec<YearMarkers>,
}

impl RoadmapSnapshot {
    /// Hàng tiêu đề năm.
    pub fn year_summaries(&self) -> &[YearSummary] {
        &self.years
    }

    /// Các làn tính năng theo phân hệ.
    pub fn feature_lanes(&self) -> &[ModuleLane] {
        &self.lanes
    }
}

/// Lỗi chung khi dựng roadmap.
#[derive(Debug, thiserror::Error)]
pub enum RoadmapError {
    #[error("Nguồn dữ liệu không chứa danh sách sự kiện")]
    MissingData,
    #[error("Không đọc được dữ liệu sự kiện: {0}")]
    Parse(String),
    #[error("Lỗi khác: {0}")]
    Other(String),
}
