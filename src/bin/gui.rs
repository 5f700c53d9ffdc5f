#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.
//! 왼쪽 선택 패널, 3D 미세조직/응력 뷰어, 속성 표, 비교 차트로 구성된다.

use std::collections::hash_map::DefaultHasher;
use std::f64::consts::FRAC_PI_2;
use std::hash::{Hash, Hasher};
use std::{fs, path::Path};

use eframe::egui::epaint::{Mesh, TextShape};
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rand::rngs::StdRng;
use rand::SeedableRng;

use material_viewer::catalog::{self, MaterialRecord, Property};
use material_viewer::charts::{self, ChartGeometry};
use material_viewer::config;
use material_viewer::filter;
use material_viewer::metrics;
use material_viewer::selection::Selection;
use material_viewer::visual::{color_of, deformation_scale, generate_grains, GrainField, Rgb};

fn main() -> Result<(), eframe::Error> {
    // 카탈로그가 깨져 있으면 NaN이 페인터까지 가기 전에 기동을 중단한다.
    if let Err(err) = catalog::validate(catalog::materials()) {
        eprintln!("오류: {err}");
        return Ok(());
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1280.0, 860.0));
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = config::load_or_default().unwrap_or_default();
    eframe::run_native(
        "Material Properties Viewer",
        native,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg.clone()))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 속성 표 탭.
#[derive(Clone, Copy, PartialEq, Eq)]
enum PropertiesTab {
    Mechanical,
    Physical,
    Performance,
}

/// 비교 차트 탭.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ChartTab {
    Scatter,
    Radar,
}

/// 궤도 카메라 상태. 드래그로 회전, 스크롤로 줌.
struct OrbitState {
    yaw: f64,
    pitch: f64,
    distance: f64,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.35,
            distance: 5.0,
        }
    }
}

/// 프레임마다 전진하는 애니메이션 상태.
/// 위상은 렌더 프리미티브가 아니라 여기에만 산다.
#[derive(Default)]
struct AnimationState {
    elapsed_secs: f64,
    spin_yaw: f64,
    spin_pitch: f64,
}

impl AnimationState {
    /// 경과 시간과 자동 회전 위상을 dt만큼 전진시킨다.
    fn advance(&mut self, dt: f64) {
        self.elapsed_secs += dt;
        self.spin_yaw += 0.12 * dt;
        self.spin_pitch += 0.06 * dt;
    }
}

struct GuiApp {
    config: config::Config,
    selection: Selection<'static>,
    search_term: String,
    facet: Option<String>,
    properties_tab: PropertiesTab,
    chart_tab: ChartTab,
    x_property: Property,
    y_property: Property,
    orbit: OrbitState,
    anim: AnimationState,
    /// 포커스 재료 id를 키로 하는 결정립 기하 캐시
    grain_cache: Option<(&'static str, GrainField)>,
    show_settings_modal: bool,
    settings_status: Option<String>,
    ui_scale: f32,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let materials = catalog::materials();
        // 카탈로그는 검증을 통과했고 비어 있지 않으므로 첫 레코드가 초기 포커스다.
        let selection = Selection::new(materials, &materials[0])
            .expect("first catalog record is a valid initial focus");
        let ui_scale = config.ui_scale;
        let x_property = config.default_x_property;
        let y_property = config.default_y_property;
        Self {
            config,
            selection,
            search_term: String::new(),
            facet: None,
            properties_tab: PropertiesTab::Mechanical,
            chart_tab: ChartTab::Scatter,
            x_property,
            y_property,
            orbit: OrbitState::default(),
            anim: AnimationState::default(),
            grain_cache: None,
            show_settings_modal: false,
            settings_status: None,
            ui_scale,
        }
    }

    /// 포커스 재료의 결정립 필드를 돌려준다. 포커스가 바뀔 때만 재생성한다.
    fn grain_field(&mut self) -> &GrainField {
        let focused = self.selection.focused();
        let stale = !matches!(&self.grain_cache, Some((id, _)) if *id == focused.id);
        if stale {
            let seed = self
                .config
                .grain_seed
                .unwrap_or_else(|| stable_seed(focused.id));
            let mut rng = StdRng::seed_from_u64(seed);
            let field = generate_grains(focused, &mut rng);
            self.grain_cache = Some((focused.id, field));
        }
        let (_, field) = self.grain_cache.as_ref().expect("cache filled above");
        field
    }

    fn selector_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Material Selection");
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::singleline(&mut self.search_term).hint_text("Search materials..."),
        );
        ui.add_space(4.0);

        let families: Vec<String> = filter::families(catalog::materials())
            .into_iter()
            .map(str::to_owned)
            .collect();
        ui.horizontal_wrapped(|ui| {
            if ui
                .selectable_label(self.facet.is_none(), "All")
                .clicked()
            {
                self.facet = None;
            }
            for fam in &families {
                let active = self.facet.as_deref() == Some(fam.as_str());
                if ui.selectable_label(active, fam).clicked() {
                    self.facet = if active { None } else { Some(fam.clone()) };
                }
            }
        });
        ui.separator();

        let rows = filter::filter(
            catalog::materials(),
            &self.search_term,
            self.facet.as_deref(),
        );
        if rows.is_empty() {
            ui.label("No matching materials.");
            return;
        }
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("material_rows")
                .num_columns(4)
                .spacing([8.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label("");
                    ui.strong("Material");
                    ui.strong("Heat treatment");
                    ui.strong("Cmp");
                    ui.end_row();
                    for m in rows {
                        let swatch = rgb_to_color32(color_of(m), 1.0);
                        let (dot_rect, _) = ui
                            .allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        ui.painter()
                            .circle_filled(dot_rect.center(), 5.0, swatch);

                        let focused = self.selection.focused().id == m.id;
                        if ui.selectable_label(focused, m.name).clicked() {
                            self.selection.select(m);
                        }
                        if ui
                            .selectable_label(focused, m.heat_treatment)
                            .clicked()
                        {
                            self.selection.select(m);
                        }
                        let mut compared = self.selection.is_compared(m);
                        if ui.checkbox(&mut compared, "").changed() {
                            self.selection.toggle_comparison(m);
                        }
                        ui.end_row();
                    }
                });
        });
    }

    fn viewer_3d(&mut self, ui: &mut egui::Ui) {
        let focused = self.selection.focused();
        let elapsed = self.anim.elapsed_secs;
        let yaw = self.orbit.yaw + self.anim.spin_yaw;
        let pitch = self.orbit.pitch + self.anim.spin_pitch.sin() * 0.25;
        let distance = self.orbit.distance;

        let height = (ui.available_height() * 0.55).max(260.0);
        let size = egui::vec2(ui.available_width(), height);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let rect = response.rect;
        painter.rect_filled(rect, 4.0, egui::Color32::from_rgb(16, 16, 22));

        // 드래그 궤도 + 스크롤 줌
        if response.dragged() {
            let delta = response.drag_delta();
            self.orbit.yaw += delta.x as f64 * 0.01;
            self.orbit.pitch = (self.orbit.pitch + delta.y as f64 * 0.01).clamp(-1.4, 1.4);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y) as f64;
            if scroll != 0.0 {
                self.orbit.distance = (self.orbit.distance - scroll * 0.01).clamp(2.5, 12.0);
            }
        }

        let camera = Camera {
            yaw,
            pitch,
            distance,
            rect,
        };

        let mut triangles: Vec<ShadedTriangle> = Vec::new();
        let base = color_of(focused);

        // 결정립 필드 (원점 중심)
        {
            let field = self.grain_field();
            for (grain, chunk) in field.positions.chunks_exact(3).enumerate() {
                let color = field.grain_colors[grain / 12];
                collect_triangle(&camera, [chunk[0], chunk[1], chunk[2]], color, &mut triangles);
            }
        }

        // 응력 큐브: 변형 스케일을 적용해 결정립 필드 옆에 둔다.
        let scale = deformation_scale(focused, elapsed);
        let cube_center = [2.6, 0.0, 0.0];
        for tri in cube_triangles(cube_center, 0.55, scale) {
            collect_triangle(&camera, tri, base, &mut triangles);
        }

        paint_depth_sorted(&painter, triangles);

        // 캡션
        painter.text(
            egui::pos2(rect.center().x - rect.width() * 0.12, rect.bottom() - 18.0),
            egui::Align2::CENTER_CENTER,
            format!("{} - {}", focused.name, focused.heat_treatment),
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
        );
        painter.text(
            egui::pos2(rect.center().x + rect.width() * 0.30, rect.bottom() - 18.0),
            egui::Align2::CENTER_CENTER,
            "Stress Simulation",
            egui::FontId::proportional(12.0),
            egui::Color32::WHITE,
        );
    }

    fn properties_panel(&mut self, ui: &mut egui::Ui) {
        let m = self.selection.focused();
        ui.heading(m.name);
        ui.label(m.heat_treatment);
        if let Some(desc) = m.description {
            ui.small(desc);
        }
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.properties_tab, PropertiesTab::Mechanical, "Mechanical");
            ui.selectable_value(&mut self.properties_tab, PropertiesTab::Physical, "Physical");
            ui.selectable_value(
                &mut self.properties_tab,
                PropertiesTab::Performance,
                "Performance",
            );
        });
        ui.separator();

        egui::Grid::new("property_table")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .striped(true)
            .show(ui, |ui| match self.properties_tab {
                PropertiesTab::Mechanical => {
                    property_row(ui, "Ultimate Tensile Strength (Su)", format!("{:.0} MPa", m.su));
                    property_row(ui, "Yield Strength (Sy)", format!("{:.0} MPa", m.sy));
                    property_row(ui, "Elongation (A5)", format!("{:.1} %", m.a5));
                    property_row(ui, "Hardness (Bhn)", format!("{:.0}", m.bhn));
                    property_row(ui, "Elastic Modulus (E)", format!("{:.0} MPa", m.elastic_modulus));
                    property_row(ui, "Shear Modulus (G)", format!("{:.0} MPa", m.shear_modulus));
                }
                PropertiesTab::Physical => {
                    property_row(ui, "Density (Ro)", format!("{:.0} kg/m3", m.density));
                    property_row(ui, "Poisson's Ratio (mu)", format!("{:.2}", m.poisson_ratio));
                    if let Some(ph) = m.ph {
                        property_row(ui, "pH", format!("{ph:.1}"));
                    }
                }
                PropertiesTab::Performance => {
                    property_row(
                        ui,
                        "Strength-to-Weight Ratio",
                        format!("{:.2} Nm/kg", metrics::strength_to_weight(m)),
                    );
                    property_row(
                        ui,
                        "Stiffness-to-Weight Ratio",
                        format!("{:.2} Nm/kg", metrics::stiffness_to_weight(m)),
                    );
                    property_row(
                        ui,
                        "Toughness (Estimated)",
                        format!("{:.2} MPa", metrics::toughness_estimate(m)),
                    );
                    property_row(ui, "Ductility", metrics::ductility(m.a5).to_string());
                }
            });
    }

    fn charts_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Material Comparison");
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.chart_tab, ChartTab::Scatter, "Scatter Plot");
            ui.selectable_value(&mut self.chart_tab, ChartTab::Radar, "Radar Chart");
        });
        ui.separator();

        let compared = self.selection.compared();
        match self.chart_tab {
            ChartTab::Scatter => {
                ui.horizontal(|ui| {
                    property_combo(ui, "x_property", "X", &mut self.x_property);
                    property_combo(ui, "y_property", "Y", &mut self.y_property);
                });
                scatter_chart_ui(ui, &compared, self.x_property, self.y_property);
            }
            ChartTab::Radar => radar_chart_ui(ui, &compared),
        }
    }

    fn settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings_modal {
            return;
        }
        let mut open = self.show_settings_modal;
        egui::Window::new("Settings")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("UI scale");
                if ui
                    .add(egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x"))
                    .changed()
                {
                    ctx.set_pixels_per_point(self.ui_scale);
                }
                ui.separator();
                ui.label("Theme");
                ui.horizontal(|ui| {
                    for (label, theme) in [
                        ("System", config::Theme::System),
                        ("Light", config::Theme::Light),
                        ("Dark", config::Theme::Dark),
                    ] {
                        ui.selectable_value(&mut self.config.theme, theme, label);
                    }
                });
                ui.separator();
                ui.label("Default scatter axes");
                ui.horizontal(|ui| {
                    property_combo(ui, "default_x", "X", &mut self.config.default_x_property);
                    property_combo(ui, "default_y", "Y", &mut self.config.default_y_property);
                });
                ui.separator();
                let mut fixed_seed = self.config.grain_seed.is_some();
                if ui
                    .checkbox(&mut fixed_seed, "Fixed grain seed")
                    .changed()
                {
                    self.config.grain_seed = if fixed_seed { Some(0) } else { None };
                    self.grain_cache = None;
                }
                if let Some(seed) = &mut self.config.grain_seed {
                    if ui.add(egui::DragValue::new(seed)).changed() {
                        self.grain_cache = None;
                    }
                }
                ui.separator();
                if ui.button("Save").clicked() {
                    self.config.ui_scale = self.ui_scale;
                    self.settings_status = Some(match self.config.save() {
                        Ok(()) => "Saved to config.toml".to_string(),
                        Err(e) => format!("Save failed: {e}"),
                    });
                }
                if let Some(status) = &self.settings_status {
                    ui.small(status);
                }
            });
        self.show_settings_modal = open;
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        match self.config.theme {
            config::Theme::Light => ctx.set_visuals(egui::Visuals::light()),
            config::Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
            config::Theme::System => {}
        }

        // 애니메이션 틱. 파생 뷰는 매 프레임 현재 상태에서 다시 계산한다.
        let dt = ctx.input(|i| i.stable_dt) as f64;
        self.anim.advance(dt.min(0.1));
        ctx.request_repaint();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Material Properties Visualization");
                ui.label("| Explore steel materials and their properties in 3D");
                ui.separator();
                if ui.button("Settings").clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        self.settings_modal(ctx);

        egui::SidePanel::left("selector_panel")
            .resizable(true)
            .default_width(330.0)
            .show(ctx, |ui| self.selector_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewer_3d(ui);
            ui.separator();
            ui.columns(2, |cols| {
                self.properties_panel(&mut cols[0]);
                self.charts_panel(&mut cols[1]);
            });
        });
    }
}

/// id 문자열에서 세션과 무관하게 안정적인 시드를 만든다.
fn stable_seed(id: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    hasher.finish()
}

fn rgb_to_color32(c: Rgb, alpha: f64) -> egui::Color32 {
    let to8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(to8(c.r), to8(c.g), to8(c.b), to8(alpha))
}

fn property_row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(label);
    ui.label(value);
    ui.end_row();
}

fn property_combo(ui: &mut egui::Ui, id: &str, label: &str, current: &mut Property) {
    ui.label(label);
    egui::ComboBox::from_id_source(id)
        .selected_text(current.label())
        .show_ui(ui, |ui| {
            for p in Property::ALL {
                ui.selectable_value(current, p, p.label());
            }
        });
}

// ---- 소프트웨어 3D 투영 ----

struct Camera {
    yaw: f64,
    pitch: f64,
    distance: f64,
    rect: egui::Rect,
}

impl Camera {
    /// 월드 좌표를 요/피치 회전 후 카메라 기준으로 옮긴다.
    fn view(&self, p: [f64; 3]) -> [f64; 3] {
        let (sy, cy) = self.yaw.sin_cos();
        let x1 = p[0] * cy + p[2] * sy;
        let z1 = -p[0] * sy + p[2] * cy;
        let (sp, cp) = self.pitch.sin_cos();
        let y2 = p[1] * cp - z1 * sp;
        let z2 = p[1] * sp + z1 * cp;
        [x1, y2, z2]
    }

    /// 카메라 좌표 → 픽셀. 반환 깊이는 카메라로부터의 거리로,
    /// 0 이하(카메라 뒤)는 None이다.
    fn project(&self, v: [f64; 3]) -> Option<(egui::Pos2, f64)> {
        let depth = self.distance - v[2];
        if depth <= 0.1 {
            return None;
        }
        let focal = self.rect.height().min(self.rect.width()) as f64 * 0.45 * self.distance / 5.0;
        let s = focal / depth;
        let c = self.rect.center();
        Some((
            egui::pos2(
                c.x + (v[0] * s) as f32,
                c.y - (v[1] * s) as f32,
            ),
            depth,
        ))
    }
}

struct ShadedTriangle {
    points: [egui::Pos2; 3],
    depth: f64,
    color: egui::Color32,
}

/// 삼각형 하나를 투영·셰이딩해 목록에 추가한다.
/// 간이 디렉셔널 라이트 한 개로 면 법선 기반 명암만 준다.
fn collect_triangle(
    camera: &Camera,
    world: [[f64; 3]; 3],
    color: Rgb,
    out: &mut Vec<ShadedTriangle>,
) {
    let v = [
        camera.view(world[0]),
        camera.view(world[1]),
        camera.view(world[2]),
    ];
    let e1 = sub(v[1], v[0]);
    let e2 = sub(v[2], v[0]);
    let n = normalize(cross(e1, e2));
    const LIGHT: [f64; 3] = [0.37, 0.65, 0.66];
    let shade = 0.35 + 0.65 * dot(n, LIGHT).abs();

    let mut points = [egui::Pos2::ZERO; 3];
    let mut depth_sum = 0.0;
    for (i, vv) in v.iter().enumerate() {
        match camera.project(*vv) {
            Some((pos, depth)) => {
                points[i] = pos;
                depth_sum += depth;
            }
            None => return,
        }
    }
    out.push(ShadedTriangle {
        points,
        depth: depth_sum / 3.0,
        color: rgb_to_color32(
            Rgb {
                r: color.r * shade,
                g: color.g * shade,
                b: color.b * shade,
            },
            1.0,
        ),
    });
}

/// 페인터 알고리즘: 먼 삼각형부터 메시에 밀어 넣는다.
fn paint_depth_sorted(painter: &egui::Painter, mut triangles: Vec<ShadedTriangle>) {
    triangles.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    let mut mesh = Mesh::default();
    for tri in triangles {
        let base = mesh.vertices.len() as u32;
        for p in tri.points {
            mesh.colored_vertex(p, tri.color);
        }
        mesh.add_triangle(base, base + 1, base + 2);
    }
    painter.add(mesh);
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn normalize(v: [f64; 3]) -> [f64; 3] {
    let len = dot(v, v).sqrt();
    if len > 0.0 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        v
    }
}

/// 변형 스케일이 적용된 응력 큐브의 삼각형 12개.
fn cube_triangles(center: [f64; 3], half: f64, scale: [f64; 3]) -> Vec<[[f64; 3]; 3]> {
    const FACES: [[[f64; 3]; 4]; 6] = [
        // front / back
        [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
        [[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]],
        // top / bottom
        [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
        [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
        // right / left
        [[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]],
        [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
    ];
    let vertex = |c: [f64; 3]| {
        [
            center[0] + c[0] * half * scale[0],
            center[1] + c[1] * half * scale[1],
            center[2] + c[2] * half * scale[2],
        ]
    };
    let mut out = Vec::with_capacity(12);
    for face in FACES {
        let q = [vertex(face[0]), vertex(face[1]), vertex(face[2]), vertex(face[3])];
        out.push([q[0], q[1], q[2]]);
        out.push([q[0], q[2], q[3]]);
    }
    out
}

// ---- 2D 차트 렌더링 ----

const SCATTER_PADDING: f64 = 40.0;
const ACCENT: egui::Color32 = egui::Color32::from_rgb(0xff, 0x45, 0x00);
const SERIES_BLUE: egui::Color32 = egui::Color32::from_rgb(0x34, 0x98, 0xdb);
const AXIS_GRAY: egui::Color32 = egui::Color32::from_rgb(0x66, 0x66, 0x66);

/// 시리즈 색: 첫 재료(포커스)는 강조색, 이후는 인덱스에 따라 옅어지는 파랑.
fn series_color(index: usize) -> egui::Color32 {
    if index == 0 {
        ACCENT.gamma_multiply(0.85)
    } else {
        let alpha = (0.7 - index as f32 * 0.1).max(0.2);
        SERIES_BLUE.gamma_multiply(alpha)
    }
}

/// 점 라벨: 재료명의 마지막 공백 구분 토큰 (등급 번호).
fn last_name_token(name: &str) -> &str {
    name.split_whitespace().next_back().unwrap_or(name)
}

fn scatter_chart_ui(ui: &mut egui::Ui, materials: &[&MaterialRecord], px: Property, py: Property) {
    let size = egui::vec2(ui.available_width(), 300.0);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;

    let geom = ChartGeometry {
        width: rect.width() as f64,
        height: rect.height() as f64,
        padding: SCATTER_PADDING,
    };
    let points = charts::scatter_points(materials, px, py, &geom);

    let stroke = egui::Stroke::new(1.0, AXIS_GRAY);
    let origin = egui::pos2(
        rect.left() + SCATTER_PADDING as f32,
        rect.bottom() - SCATTER_PADDING as f32,
    );
    painter.line_segment(
        [origin, egui::pos2(rect.right() - SCATTER_PADDING as f32, origin.y)],
        stroke,
    );
    painter.line_segment(
        [origin, egui::pos2(origin.x, rect.top() + SCATTER_PADDING as f32)],
        stroke,
    );

    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 10.0),
        egui::Align2::CENTER_CENTER,
        px.label(),
        egui::FontId::proportional(12.0),
        AXIS_GRAY,
    );
    // Y축 라벨은 세로로 눕혀 그린다.
    let galley = painter.layout_no_wrap(
        py.label().to_string(),
        egui::FontId::proportional(12.0),
        AXIS_GRAY,
    );
    let y_label_pos = egui::pos2(
        rect.left() + 8.0,
        rect.center().y + galley.size().x / 2.0,
    );
    painter.add(TextShape::new(y_label_pos, galley, AXIS_GRAY).with_angle(-FRAC_PI_2 as f32));

    for (i, (m, pt)) in materials.iter().zip(points.iter()).enumerate() {
        let pos = egui::pos2(rect.left() + pt.x as f32, rect.top() + pt.y as f32);
        painter.circle_filled(pos, 6.0, series_color(i));
        painter.text(
            egui::pos2(pos.x, pos.y - 10.0),
            egui::Align2::CENTER_BOTTOM,
            last_name_token(m.name),
            egui::FontId::proportional(10.0),
            ui.visuals().text_color(),
        );
    }
}

fn radar_chart_ui(ui: &mut egui::Ui, materials: &[&MaterialRecord]) {
    let size = egui::vec2(ui.available_width(), 350.0);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = (rect.width().min(rect.height()) / 2.0 - 30.0).max(10.0);

    let grid = egui::Stroke::new(1.0, egui::Color32::from_gray(0x55));
    for ring in 1..=5 {
        painter.circle_stroke(center, radius * ring as f32 / 5.0, grid);
    }
    let angles = charts::radar_axis_angles();
    for (i, angle) in angles.iter().enumerate() {
        let dir = egui::vec2(angle.cos() as f32, angle.sin() as f32);
        painter.line_segment([center, center + dir * radius], grid);
        painter.text(
            center + dir * (radius + 16.0),
            egui::Align2::CENTER_CENTER,
            Property::RADAR[i].symbol(),
            egui::FontId::proportional(11.0),
            ui.visuals().text_color(),
        );
    }

    let polygons = charts::radar_polygons(
        materials,
        (center.x as f64, center.y as f64),
        radius as f64,
    );
    for (i, polygon) in polygons.iter().enumerate() {
        let color = series_color(i);
        let pts: Vec<egui::Pos2> = polygon
            .iter()
            .map(|&(x, y)| egui::pos2(x as f32, y as f32))
            .collect();

        // 다각형은 중심에 대해 별 모양이므로 중심 기준 부채꼴 분할로 채운다.
        let fill = color.gamma_multiply(0.35);
        let mut mesh = Mesh::default();
        mesh.colored_vertex(center, fill);
        for p in &pts {
            mesh.colored_vertex(*p, fill);
        }
        for k in 0..pts.len() as u32 {
            let next = (k + 1) % pts.len() as u32;
            mesh.add_triangle(0, k + 1, next + 1);
        }
        painter.add(mesh);

        let mut closed = pts.clone();
        if let Some(first) = pts.first() {
            closed.push(*first);
        }
        painter.add(egui::Shape::line(closed, egui::Stroke::new(2.0, color)));
        for p in &pts {
            painter.circle_filled(*p, 4.0, color);
        }
    }

    // 범례
    let legend_y = rect.bottom() - 14.0;
    let mut x = rect.left() + 10.0;
    for (i, m) in materials.iter().enumerate() {
        let color = series_color(i);
        painter.rect_filled(
            egui::Rect::from_min_size(egui::pos2(x, legend_y - 6.0), egui::vec2(12.0, 12.0)),
            0.0,
            color,
        );
        let text = format!("{} ({})", m.name, m.heat_treatment);
        let galley = painter.layout_no_wrap(
            text,
            egui::FontId::proportional(11.0),
            ui.visuals().text_color(),
        );
        let w = galley.size().x;
        painter.galley(egui::pos2(x + 16.0, legend_y - 7.0), galley, ui.visuals().text_color());
        x += 16.0 + w + 18.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_projects_origin_to_rect_center() {
        let camera = Camera {
            yaw: 0.0,
            pitch: 0.0,
            distance: 5.0,
            rect: egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(400.0, 300.0)),
        };
        let (pos, depth) = camera.project(camera.view([0.0, 0.0, 0.0])).expect("visible");
        assert!((pos.x - 200.0).abs() < 1e-3);
        assert!((pos.y - 150.0).abs() < 1e-3);
        assert!((depth - 5.0).abs() < 1e-9);
    }

    #[test]
    fn camera_rejects_points_behind_eye() {
        let camera = Camera {
            yaw: 0.0,
            pitch: 0.0,
            distance: 3.0,
            rect: egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(400.0, 300.0)),
        };
        assert!(camera.project([0.0, 0.0, 3.5]).is_none());
    }

    #[test]
    fn series_palette_fades_with_index() {
        let a1 = series_color(1).a();
        let a2 = series_color(2).a();
        let a3 = series_color(3).a();
        assert!(a1 > a2 && a2 > a3);
    }

    #[test]
    fn name_token_takes_trailing_grade() {
        assert_eq!(last_name_token("Steel SAE 1015"), "1015");
        assert_eq!(last_name_token("Inconel"), "Inconel");
    }

    #[test]
    fn cube_has_twelve_triangles() {
        let tris = cube_triangles([0.0, 0.0, 0.0], 0.5, [1.0, 1.0, 1.0]);
        assert_eq!(tris.len(), 12);
    }
}
