//! Interactive window for a [`Figure`], drawn with Bevy gizmos.
//!
//! The plot is laid out in a world box (see [`SceneLayout`]) with Z up. The
//! camera orbits, pans and zooms with the mouse; closing the window returns
//! control to the caller.

use std::io;

use bevy::log::LogPlugin;
use bevy::math::Isometry3d;
use bevy::prelude::*;
use bevy_editor_cam::prelude::*;
use log::info;

use crate::io::options::PlotOptions;
use crate::plot::{Figure, SceneLayout, Series};

/// Distance of the axis labels from the edges of the plot box.
const LABEL_OFFSET: f32 = 0.08;

/// Everything drawn each frame, already in world coordinates.
#[derive(Resource, Debug, Clone, PartialEq)]
pub(crate) struct PlotScene {
    pub path: Vec<Vec3>,
    pub markers: Vec<Vec3>,
    pub arrows: Vec<(Vec3, Vec3)>,
    pub reference_arrows: Vec<(Vec3, Vec3)>,
    pub box_size: Vec3,
    pub center: Vec3,
    pub marker_radius: f32,
    pub line_color: Color,
    pub marker_color: Color,
    pub arrow_color: Color,
    pub frame_color: Color,
}

#[derive(Resource, Debug, Clone)]
struct PlotText {
    title: Option<String>,
    labels: [String; 3],
    color: Color,
}

#[derive(Component)]
struct AxisLabel {
    anchor: Vec3,
}

#[derive(Component)]
struct PlotCamera;

fn srgb(c: [f32; 3]) -> Color {
    Color::srgb(c[0], c[1], c[2])
}

fn world(layout: &SceneLayout, p: crate::geometry::Point3) -> Vec3 {
    Vec3::from_array(layout.to_world(p))
}

pub(crate) fn build_scene(figure: &Figure, layout: &SceneLayout, options: &PlotOptions) -> PlotScene {
    let box_size = Vec3::from_array(layout.box_size());
    let (path, markers, arrows) = match &figure.series {
        Series::Path(points) => {
            let path: Vec<Vec3> = points.iter().map(|p| world(layout, *p)).collect();
            (path.clone(), path, Vec::new())
        }
        Series::Quiver { points, length } => {
            let markers = points.iter().map(|p| world(layout, p.point)).collect();
            let arrows = points
                .iter()
                .map(|p| (world(layout, p.point), world(layout, p.tip(*length))))
                .collect();
            (Vec::new(), markers, arrows)
        }
    };
    let reference_arrows = figure
        .extra_arrows
        .iter()
        .map(|a| (world(layout, a.start), world(layout, a.end)))
        .collect();
    PlotScene {
        path,
        markers,
        arrows,
        reference_arrows,
        box_size,
        center: Vec3::from_array(layout.center()),
        marker_radius: options.marker_radius * box_size.max_element(),
        line_color: srgb(options.line_color),
        marker_color: srgb(options.marker_color),
        arrow_color: srgb(options.arrow_color),
        frame_color: Color::srgb(0.6, 0.6, 0.6),
    }
}

/// Anchors for the X, Y and Z labels, just outside the box edges.
pub(crate) fn label_anchors(box_size: Vec3) -> [Vec3; 3] {
    [
        Vec3::new(box_size.x / 2.0, -LABEL_OFFSET, 0.0),
        Vec3::new(box_size.x + LABEL_OFFSET, box_size.y / 2.0, 0.0),
        Vec3::new(-LABEL_OFFSET, -LABEL_OFFSET, box_size.z / 2.0),
    ]
}

/// Opens a window showing `figure` and blocks until it is closed.
pub fn show(figure: &Figure, options: &PlotOptions) -> io::Result<()> {
    let layout = SceneLayout::new(figure)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no points to plot"))?;
    let scene = build_scene(figure, &layout, options);
    let text = PlotText {
        title: figure.title.clone(),
        labels: figure.axis_labels.clone(),
        color: Color::BLACK,
    };
    let title = figure.title.clone().unwrap_or_else(|| options.title.clone());
    info!("opening plot window with {} points", figure.len());

    let exit = App::new()
        .insert_resource(ClearColor(srgb(options.background_color)))
        .insert_resource(scene)
        .insert_resource(text)
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title,
                        resolution: (options.window_width, options.window_height).into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<LogPlugin>(),
            DefaultEditorCamPlugins,
        ))
        .add_systems(Startup, setup)
        .add_systems(Update, (draw_plot, place_axis_labels))
        .run();

    if exit.is_error() {
        return Err(io::Error::other("plot window exited with an error"));
    }
    Ok(())
}

fn setup(mut commands: Commands, scene: Res<PlotScene>, text: Res<PlotText>) {
    let center = scene.center;
    let distance = 2.5 * scene.box_size.max_element().max(f32::EPSILON);
    let eye = center + Vec3::new(-1.2, -1.8, 1.0).normalize() * distance;
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(eye).looking_at(center, Vec3::Z),
        EditorCam::default(),
        PlotCamera,
    ));

    for (label, anchor) in text.labels.iter().zip(label_anchors(scene.box_size)) {
        commands.spawn((
            Text::new(label.clone()),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(text.color),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            AxisLabel { anchor },
        ));
    }

    if let Some(title) = &text.title {
        commands.spawn((
            Text::new(title.clone()),
            TextFont {
                font_size: 20.0,
                ..default()
            },
            TextColor(text.color),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(8.0),
                left: Val::Px(8.0),
                ..default()
            },
        ));
    }
}

fn draw_plot(mut gizmos: Gizmos, scene: Res<PlotScene>) {
    gizmos.cuboid(
        Transform::from_translation(scene.center).with_scale(scene.box_size),
        scene.frame_color,
    );
    if scene.path.len() > 1 {
        gizmos.linestrip(scene.path.iter().copied(), scene.line_color);
    }
    for &p in &scene.markers {
        gizmos.sphere(Isometry3d::from_translation(p), scene.marker_radius, scene.marker_color);
    }
    for &(start, end) in &scene.arrows {
        gizmos.arrow(start, end, scene.arrow_color);
    }
    for &(start, end) in &scene.reference_arrows {
        gizmos.arrow(start, end, Color::BLACK);
    }
}

fn place_axis_labels(
    camera_q: Query<(&Camera, &GlobalTransform), With<PlotCamera>>,
    mut labels: Query<(&AxisLabel, &mut Node, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = camera_q.get_single() else {
        return;
    };
    for (label, mut node, mut visibility) in &mut labels {
        match camera.world_to_viewport(camera_transform, label.anchor) {
            Ok(pos) => {
                node.left = Val::Px(pos.x);
                node.top = Val::Px(pos.y);
                *visibility = Visibility::Inherited;
            }
            Err(_) => *visibility = Visibility::Hidden,
        }
    }
}
