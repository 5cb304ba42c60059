use insta::assert_snapshot;
use limner::{
    CommandLog, DrawCommand, Drawable, DrawingContext, Image, LineCap, LineJoin, Point, Stroke,
    draw, hsl, render, rgb, rgba,
};

fn record(image: &Image, center: Point) -> CommandLog {
    let mut log = CommandLog::new();
    draw(image, center, &mut log);
    log
}

#[test]
fn beside_circles_command_log() {
    let image = Image::circle(10.0)
        .beside(Image::circle(20.0))
        .fill_color(rgb(255, 0, 0));
    let log = record(&image, Point::new(100.0, 100.0));
    assert_snapshot!(log.to_string().trim_end(), @r"
    begin_path
    arc 80 100 10 0 6.28319
    close_path
    fill_style rgba(255, 0, 0, 1)
    fill
    stroke_style rgba(0, 0, 0, 1) 1 butt miter
    stroke
    begin_path
    arc 110 100 20 0 6.28319
    close_path
    fill_style rgba(255, 0, 0, 1)
    fill
    stroke_style rgba(0, 0, 0, 1) 1 butt miter
    stroke
    ");
}

#[test]
fn triangle_above_rectangle_command_log() {
    let image = Image::triangle(20.0, 10.0)
        .above(Image::rectangle(20.0, 10.0))
        .fill_color(hsl(120.0, 1.0, 0.5));
    let log = record(&image, Point::new(50.0, 50.0));
    assert_snapshot!(log.to_string().trim_end(), @r"
    begin_path
    move_to 40 50
    line_to 50 40
    line_to 60 50
    close_path
    fill_style hsla(120, 100%, 50%, 1)
    fill
    stroke_style rgba(0, 0, 0, 1) 1 butt miter
    stroke
    begin_path
    rect 40 50 20 10
    close_path
    fill_style hsla(120, 100%, 50%, 1)
    fill
    stroke_style rgba(0, 0, 0, 1) 1 butt miter
    stroke
    ");
}

#[test]
fn overlay_occludes_in_visit_order() {
    let image = Image::rectangle(4.0, 2.0)
        .on(Image::triangle(6.0, 6.0).at(0.0, 1.0))
        .no_line();
    let log = record(&image, Point::new(0.0, 0.0));
    assert_snapshot!(log.to_string().trim_end(), @r"
    begin_path
    move_to -3 2
    line_to 0 -4
    line_to 3 2
    close_path
    begin_path
    rect -2 -1 4 2
    close_path
    ");
}

#[test]
fn custom_base_context() {
    let stroke = Stroke {
        width: 3.0,
        color: rgba(0, 0, 255, 0.5),
        cap: LineCap::Round,
        join: LineJoin::Bevel,
    };
    let base = DrawingContext::new(Some(hsl(0.0, 0.0, 0.5)), Some(stroke));
    let mut log = CommandLog::new();
    render(&Image::circle(1.0), Point::new(5.0, 5.0), &base, &mut log);
    assert_snapshot!(log.to_string().trim_end(), @r"
    begin_path
    arc 5 5 1 0 6.28319
    close_path
    fill_style hsla(0, 0%, 50%, 1)
    fill
    stroke_style rgba(0, 0, 255, 0.5) 3 round bevel
    stroke
    ");
}

struct Target {
    rings: usize,
}

impl Drawable for Target {
    fn draw(&self) -> Image {
        (1..=self.rings).fold(Image::circle(1.0), |acc, n| {
            acc.on(Image::circle(1.0 + n as f64))
        })
    }
}

#[test]
fn drawable_renders_like_its_image() {
    let center = Point::new(10.0, 10.0);
    let direct = record(&Target { rings: 3 }.draw(), center);
    let deferred = record(&Image::drawable(Target { rings: 3 }), center);
    assert_eq!(direct, deferred);

    let radii: Vec<f64> = deferred
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Arc { radius, .. } => Some(*radius),
            _ => None,
        })
        .collect();
    assert_eq!(radii, [4.0, 3.0, 2.0, 1.0]);
}

#[test]
fn drawable_composes_with_combinators() {
    let image = Image::drawable(Target { rings: 1 })
        .beside(Image::rectangle(6.0, 2.0));
    assert_eq!(image.bounding_box().width(), 10.0);
    assert_eq!(image.bounding_box().height(), 4.0);
}

#[test]
fn each_frame_is_independent() {
    let image = Image::circle(2.0)
        .above(Image::triangle(3.0, 3.0))
        .line_width(2.0);
    let first = record(&image, Point::new(20.0, 20.0));
    let second = record(&image, Point::new(20.0, 20.0));
    assert_eq!(first, second);
}
