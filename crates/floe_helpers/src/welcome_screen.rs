use bevy::prelude::*;

use crate::{FONT, WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Component)]
pub struct WelcomeScreenElement;

// Title screen: a dark backdrop, a representative shape in the middle,
// the game title above it and the start hint below. The caller picks
// the shape; the rest is shared between games.
pub fn spawn_welcome_screen_shape(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    title: &str,
    shape: Mesh,
    shape_color: Color,
) {
    commands.spawn((
        Sprite::from_color(Color::BLACK, Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
        WelcomeScreenElement,
    ));

    commands.spawn((
        Mesh2d(meshes.add(shape)),
        MeshMaterial2d(materials.add(ColorMaterial::from(shape_color))),
        Transform::from_xyz(0.0, 0.0, 1.0),
        WelcomeScreenElement,
    ));

    let font = asset_server.load(FONT);
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::vertical(Val::Percent(20.0)),
                ..default()
            },
            WelcomeScreenElement,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font: font.clone(),
                    font_size: 40.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                TextLayout::new_with_justify(JustifyText::Center),
                Node {
                    align_self: AlignSelf::Center,
                    ..default()
                },
            ));
            parent.spawn((
                Text::new("Tap to start"),
                TextFont {
                    font,
                    font_size: 30.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                TextLayout::new_with_justify(JustifyText::Center),
                Node {
                    align_self: AlignSelf::Center,
                    ..default()
                },
            ));
        });
}

pub fn despawn_welcome_screen(
    mut commands: Commands,
    welcome_elements: Query<Entity, With<WelcomeScreenElement>>,
) {
    for entity in welcome_elements.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
