use sproing::{scene, Bounds, Model, ModelConfig, NoOpStepObserver, Vec2};

#[test]
fn square_topology() {
    let mut model: Model<f32> = Model::default();
    let ids = scene::square(&mut model, Vec2::new(200.0, 200.0), 100.0, 5.0);
    assert_eq!(ids, [0, 1, 2, 3]);
    assert_eq!(model.particle_count(), 4);
    assert_eq!(model.spring_count(), 6);
    for p in model.particles() {
        assert_eq!(p.links().len(), 3);
    }
    assert_eq!(model.particles()[0].pos, Vec2::new(150.0, 150.0));
    assert_eq!(model.particles()[2].vel, Vec2::new(5.0, -5.0));
}

#[test]
fn every_edge_is_shared_by_both_ends() {
    let mut model: Model<f64> = Model::default();
    scene::lattice(&mut model, Vec2::new(0.0, 0.0), 4, 3, 10.0, 2.0);
    for edge in model.edges() {
        let a = model.particles()[edge.a].links();
        let b = model.particles()[edge.b].links();
        assert_eq!(a.iter().filter(|l| l.spring == edge.spring && l.neighbor == edge.b).count(), 1);
        assert_eq!(b.iter().filter(|l| l.spring == edge.spring && l.neighbor == edge.a).count(), 1);
    }
}

#[test]
fn lattice_spring_count() {
    let mut model: Model<f32> = Model::default();
    let (cols, rows) = (5, 4);
    let first = scene::lattice(&mut model, Vec2::new(10.0, 10.0), cols, rows, 20.0, 3.0);
    assert_eq!(first, 0);
    assert_eq!(model.particle_count(), cols * rows);
    let structural = rows * (cols - 1) + cols * (rows - 1);
    let shear = 2 * (rows - 1) * (cols - 1);
    assert_eq!(model.spring_count(), structural + shear);
    assert_eq!(model.particles()[cols + 1].pos, Vec2::new(30.0, 30.0));
}

#[test]
fn lattice_appends_after_existing_particles() {
    let mut model: Model<f32> = Model::default();
    scene::square(&mut model, Vec2::new(100.0, 100.0), 40.0, 4.0);
    let first = scene::lattice(&mut model, Vec2::new(200.0, 200.0), 2, 2, 20.0, 3.0);
    assert_eq!(first, 4);
    assert_eq!(model.particle_count(), 8);
    assert!(model.edges().iter().skip(6).all(|e| e.a >= 4 && e.b >= 4));
}

#[test]
fn chain_hangs_from_fixed_end() {
    let mut model = Model::new(ModelConfig::new().with_gravity(Vec2::new(0.0, 0.5)));
    let ids = scene::chain(&mut model, Vec2::new(50.0f64, 50.0), Vec2::new(250.0, 50.0), 10, 3.0);
    assert_eq!(ids.len(), 11);
    assert_eq!(model.spring_count(), 10);
    assert!(model.particles()[ids[0]].fixed);

    let bounds = Bounds::from_size(400.0, 400.0);
    for _ in 0..5 {
        model.update(&bounds, &mut NoOpStepObserver);
    }
    let start = model.particles()[ids[0]].pos;
    let end = model.particles()[ids[10]].pos;
    assert_eq!(start, Vec2::new(50.0, 50.0));
    assert!(end.y > start.y);
}

#[test]
fn chain_springs_start_at_rest() {
    let mut model: Model<f64> = Model::default();
    scene::chain(&mut model, Vec2::new(0.0, 0.0), Vec2::new(30.0, 40.0), 5, 1.0);
    for edge in model.edges() {
        let a = model.particles()[edge.a].pos;
        let b = model.particles()[edge.b].pos;
        assert!(model.spring(edge.spring).unwrap().extension(a, b).abs() < 1e-12);
        assert!((model.spring(edge.spring).unwrap().rest_length() - 10.0).abs() < 1e-12);
    }
}
