use approx::assert_abs_diff_eq;
use lumen_engine::core::colour::Rgb8;
use lumen_engine::core::types::*;
use lumen_engine::render::render_opts::RenderOpts;
use lumen_engine::render::renderer::{RenderError, Renderer};
use lumen_engine::scene::camera::{CamInvalidError, Camera};
use lumen_engine::scene::Scene;
use lumen_engine::skybox::gradient::GradientSkybox;
use lumen_engine::skybox::solid::SolidSkybox;
use lumen_engine::skybox::Skybox;

mod common;

fn solid_scene(colour: Vector3) -> Scene {
    Scene {
        skybox: SolidSkybox::new(colour).into(),
        ..Default::default()
    }
}

#[test]
pub fn default_dimensions() {
    let opts = RenderOpts::default();
    assert_eq!(opts.dims(), [400, 225]);

    let img = common::render_simple(&Scene::default(), &opts);
    assert_eq!((img.width(), img.height()), (400, 225));
    assert_eq!(img.len(), 400 * 225);
}

#[test]
pub fn default_corner_pixels() {
    let img = common::render_simple(&Scene::default(), &RenderOpts::default());

    // Top of the image looks straight up the gradient
    assert_eq!(img[(0, 0)], Rgb8::new(127, 179, 255));
    assert_eq!(img[(399, 0)], Rgb8::new(127, 179, 255));
    // Bottom is pure white
    assert_eq!(img[(0, 224)], Rgb8::WHITE);
    assert_eq!(img[(399, 224)], Rgb8::WHITE);
}

#[test]
pub fn default_corner_colours_before_quantisation() {
    let scene = Scene::default();
    let opts = RenderOpts::default();
    let viewport = scene.camera.calculate_viewport(&opts).expect("default camera is valid");

    let top_left = Renderer::render_px(&scene, &viewport, 0, 224, 400, 225);
    assert_abs_diff_eq!(top_left, GradientSkybox::SKY_BLUE, epsilon = 1e-12);

    let bottom_right = Renderer::render_px(&scene, &viewport, 399, 0, 400, 225);
    assert_eq!(bottom_right, GradientSkybox::WHITE);
}

#[test]
pub fn default_viewport() {
    let viewport = Camera::default().calculate_viewport(&RenderOpts::default()).expect("default camera is valid");

    assert_eq!(viewport.origin, Point3::ZERO);
    assert_abs_diff_eq!(viewport.horizontal, Vector3::new(32. / 9., 0., 0.), epsilon = 1e-12);
    assert_eq!(viewport.vertical, Vector3::new(0., 2., 0.));
    assert_abs_diff_eq!(viewport.lower_left_corner, Vector3::new(-16. / 9., -1., -1.), epsilon = 1e-12);
}

#[test]
pub fn corner_rays_span_the_viewport() {
    let viewport = Camera::default().calculate_viewport(&RenderOpts::default()).expect("default camera is valid");

    let bottom_left = viewport.calc_ray(0, 0, 400, 225);
    assert_eq!(bottom_left.origin(), Point3::ZERO);
    assert_eq!(bottom_left.direction(), viewport.lower_left_corner);

    let top_right = viewport.calc_ray(399, 224, 400, 225);
    assert_abs_diff_eq!(top_right.direction(), Vector3::new(16. / 9., 1., -1.), epsilon = 1e-12);
}

#[test]
pub fn two_by_one_is_white() {
    let opts = RenderOpts {
        aspect_ratio: 2.,
        image_width: 2,
    };
    assert_eq!(opts.dims(), [2, 1]);

    let img = common::render_simple(&Scene::default(), &opts);
    assert_eq!(&*img, &[Rgb8::WHITE, Rgb8::WHITE]);
}

#[test]
pub fn single_pixel_is_white() {
    let opts = RenderOpts {
        aspect_ratio: 1.,
        image_width: 1,
    };
    let img = common::render_simple(&Scene::default(), &opts);
    assert_eq!(&*img, &[Rgb8::WHITE]);
}

#[test]
pub fn zero_height_image_is_empty() {
    // floor(1 / (16/9)) == 0
    let opts = RenderOpts {
        image_width: 1,
        ..Default::default()
    };
    assert_eq!(opts.image_height(), 0);

    let img = common::render_simple(&Scene::default(), &opts);
    assert_eq!((img.width(), img.height()), (1, 0));
    assert!(img.is_empty());
}

#[test]
pub fn gradient_uses_raw_direction() {
    // A taller viewport pushes `direction.y` outside `-1..=1`, and the gradient follows it
    let scene = Scene {
        camera: Camera {
            viewport_height: 4.,
            ..Default::default()
        },
        ..Default::default()
    };
    let img = common::render_simple(&scene, &RenderOpts::default());

    assert_eq!(img[(0, 0)], Rgb8::new(63, 140, 255));
    // Past the white end the red and green channels saturate instead of wrapping
    assert_eq!(img[(0, 224)], Rgb8::WHITE);
}

#[test]
pub fn red_channel_does_not_decrease_downwards() {
    let img = common::render_simple(&Scene::default(), &RenderOpts::default());

    for x in [0, 200, 399] {
        let column = (0..img.height()).map(|y| img[(x, y)].r()).collect::<Vec<_>>();
        assert!(column.windows(2).all(|w| w[0] <= w[1]), "column {x} not monotonic");
    }
    // Rows are uniform, since the gradient only depends on `y`
    for row in img.rows() {
        assert!(row.iter().all(|px| *px == row[0]));
    }
}

#[test]
pub fn solid_skybox_fills_the_image() {
    let scene = solid_scene(Vector3::new(0.25, 0.5, 0.75));
    let img = common::render_simple(&scene, &RenderOpts::default());

    let expected = Rgb8::new(63, 127, 191);
    let matching = img.indexed_iter().filter(|(_, _, px)| **px == expected).count();
    assert_eq!(matching, img.len());
}

#[test]
pub fn out_of_range_colours_saturate() {
    let scene = solid_scene(Vector3::new(-0.5, 2., 1.));
    let img = common::render_simple(&scene, &RenderOpts::default());
    assert!(img.iter().all(|px| *px == Rgb8::new(0, 255, 255)));
}

#[test]
pub fn non_finite_colour_is_an_error() {
    let renderer = Renderer::new(common::RENDERER_THREAD_COUNT).expect("failed creating renderer");

    for colour in [Vector3::new(Number::NAN, 0., 0.), Vector3::new(0., Number::INFINITY, 0.)] {
        let result = renderer.render(&solid_scene(colour), &RenderOpts::default());
        assert!(matches!(result, Err(RenderError::NonFiniteColour { .. })), "{result:?}");
    }
}

#[test]
pub fn invalid_camera_is_an_error() {
    let renderer = Renderer::new(common::RENDERER_THREAD_COUNT).expect("failed creating renderer");

    let scene = Scene {
        camera: Camera {
            focal_length: 0.,
            ..Default::default()
        },
        ..Default::default()
    };
    let result = renderer.render(&scene, &RenderOpts::default());
    assert!(matches!(
        result,
        Err(RenderError::InvalidCamera {
            source: CamInvalidError::FocalLengthInvalid(f)
        }) if f == 0.
    ));

    let opts = RenderOpts {
        aspect_ratio: 0.,
        ..Default::default()
    };
    let result = renderer.render(&Scene::default(), &opts);
    assert!(matches!(
        result,
        Err(RenderError::InvalidCamera {
            source: CamInvalidError::AspectRatioInvalid(_)
        })
    ));
}

#[test]
pub fn thread_count_does_not_change_output() {
    let scene = Scene::default();
    let opts = RenderOpts {
        image_width: 123,
        ..Default::default()
    };

    let single = Renderer::new(1).expect("failed creating renderer").render(&scene, &opts).expect("render failed");
    let multi = Renderer::new(common::RENDERER_THREAD_COUNT)
        .expect("failed creating renderer")
        .render(&scene, &opts)
        .expect("render failed");

    assert_eq!(single.stats.num_threads, 1);
    assert_eq!(multi.stats.num_threads, common::RENDERER_THREAD_COUNT);
    assert_eq!(single.stats.num_px, single.img.len());
    assert_eq!((single.stats.width, single.stats.height), (123, 69));
    assert_eq!(single.img, multi.img);
}

#[test]
pub fn skybox_instances_dispatch() {
    let ray = lumen_engine::shared::ray::Ray::new(Point3::ZERO, Vector3::new(0., 1., -1.));
    let gradient: lumen_engine::skybox::SkyboxInstance = GradientSkybox::default().into();
    assert_eq!(gradient.sky_colour(&ray), GradientSkybox::default().sky_colour(&ray));

    let solid: lumen_engine::skybox::SkyboxInstance = SolidSkybox::new(Vector3::ONE).into();
    assert_eq!(solid.sky_colour(&ray), Vector3::ONE);
}

#[test]
pub fn corner_blue_channels_match_their_gradient_ends() {
    let scene = Scene::default();
    let viewport = scene.camera.calculate_viewport(&RenderOpts::default()).expect("default camera is valid");

    // Top-left of the image is the blue end, bottom-right the white end
    for (i, j, end) in [(0, 224, GradientSkybox::SKY_BLUE), (399, 0, GradientSkybox::WHITE)] {
        let expected = Rgb8::try_from_unit(end).expect("finite");
        let px = Rgb8::try_from_unit(Renderer::render_px(&scene, &viewport, i, j, 400, 225)).expect("finite");
        assert!(expected.b().abs_diff(px.b()) <= 1, "pixel ({i}, {j}) = {px:?}, expected {expected:?}");
        assert_eq!(px, expected);
    }
}

#[test]
pub fn overflowing_viewport_is_an_error() {
    let renderer = Renderer::new(common::RENDERER_THREAD_COUNT).expect("failed creating renderer");

    // Both settings are finite, but `aspect_ratio * viewport_height` is not
    let scene = Scene {
        camera: Camera {
            viewport_height: 1.5e308,
            ..Default::default()
        },
        ..Default::default()
    };
    let opts = RenderOpts {
        aspect_ratio: 2.,
        image_width: 8,
    };
    assert_eq!(
        scene.camera.calculate_viewport(&opts),
        Err(CamInvalidError::ViewportWidthInvalid(Number::INFINITY))
    );
    let result = renderer.render(&scene, &opts);
    assert!(matches!(
        result,
        Err(RenderError::InvalidCamera {
            source: CamInvalidError::ViewportWidthInvalid(_)
        })
    ));

    // A camera far enough out pushes the corner past the largest float
    let scene = Scene {
        camera: Camera {
            pos: Point3::new(0., 0., -Number::MAX),
            focal_length: Number::MAX,
            ..Default::default()
        },
        ..Default::default()
    };
    let result = renderer.render(&scene, &opts);
    assert!(matches!(
        result,
        Err(RenderError::InvalidCamera {
            source: CamInvalidError::LowerLeftCornerInvalid
        })
    ));
}
