use glam::DVec3;

use super::*;
use crate::test_utils::*;
use crate::{Aabb, IndexError};

// =========================================================================
// Construction errors
// =========================================================================

#[test]
fn test_build_rejects_empty_input() {
  let bounds = Aabb::new(DVec3::ZERO, DVec3::ONE);
  assert_eq!(
    Octree::build(&[], bounds, OctreeConfig::default()).unwrap_err(),
    IndexError::EmptyInput
  );
  assert_eq!(
    Octree::from_points(&[], OctreeConfig::default()).unwrap_err(),
    IndexError::EmptyInput
  );
}

#[test]
fn test_build_rejects_invalid_config() {
  let points = unit_cube_corners();
  let zero_size = Octree::from_points(&points, OctreeConfig::new(0.0, 10)).unwrap_err();
  assert!(matches!(
    zero_size,
    IndexError::InvalidParameter { name: "min_size", .. }
  ));

  let zero_points = Octree::from_points(&points, OctreeConfig::new(1.0, 0)).unwrap_err();
  assert!(matches!(
    zero_points,
    IndexError::InvalidParameter {
      name: "max_points",
      ..
    }
  ));
}

#[test]
fn test_build_rejects_non_finite_point() {
  let points = vec![DVec3::ZERO, DVec3::new(0.0, f64::INFINITY, 0.0)];
  let bounds = Aabb::new(DVec3::ZERO, DVec3::ONE);
  assert_eq!(
    Octree::build(&points, bounds, OctreeConfig::default()).unwrap_err(),
    IndexError::NonFinitePoint { index: 1 }
  );
}

// =========================================================================
// Concrete scenarios
// =========================================================================

/// One point: the root is the only node.
#[test]
fn test_single_point_is_single_leaf() {
  for max_points in [1, 2, 100] {
    let tree = Octree::from_points(&[DVec3::new(3.0, -1.0, 2.0)], OctreeConfig::new(0.1, max_points))
      .unwrap();
    let stats = tree.stats();

    assert_eq!(stats.total_nodes, 1);
    assert_eq!(stats.leaves, 1);
    assert_eq!(stats.internal, 0);
    assert_eq!(stats.occupied_leaves, 1);
    assert_eq!(stats.empty_leaves, 0);
    assert_eq!(stats.average_points_per_occupied_leaf, 1.0);
    assert_eq!(stats.max_depth, 0);
  }
}

/// Unit-cube corners with max_points = 1: one split, one corner per octant.
/// The (1,1,1) corner sits on the root's max face and must not be dropped.
#[test]
fn test_unit_cube_corners_keep_every_point() {
  let points = unit_cube_corners();
  let tree = Octree::from_points(&points, OctreeConfig::new(0.5, 1)).unwrap();
  let stats = tree.stats();

  assert_eq!(stats.total_nodes, 9);
  assert_eq!(stats.internal, 1);
  assert_eq!(stats.leaves, 8);
  assert_eq!(stats.occupied_leaves, 8);
  assert_eq!(stats.empty_leaves, 0);
  assert_eq!(stats.average_points_per_occupied_leaf, 1.0);
  assert_eq!(stats.max_depth, 1);

  // Leaves come out in octant order, which matches the fixture order.
  let leaf_points: Vec<DVec3> = tree
    .leaves()
    .map(|leaf| {
      let owned = tree.points_of(leaf);
      assert_eq!(owned.len(), 1);
      owned[0]
    })
    .collect();
  assert_eq!(leaf_points, points);
}

/// max_points equal to the point count: no split.
#[test]
fn test_at_max_points_root_stays_leaf() {
  let tree = Octree::from_points(&unit_cube_corners(), OctreeConfig::new(0.01, 8)).unwrap();
  assert_eq!(tree.len(), 1);
  assert!(tree.root().is_leaf());
}

/// Root extent at or below min_size: no split regardless of density.
#[test]
fn test_small_extent_root_stays_leaf() {
  let tree = Octree::from_points(&unit_cube_corners(), OctreeConfig::new(1.0, 1)).unwrap();
  assert_eq!(tree.stats().total_nodes, 1);
}

/// Two-level tree with hand-computed shape.
///
/// Root [0,4]^3 splits at 2; octant 0 holds two points and splits at 1;
/// octant 7 holds one point.
#[test]
fn test_two_level_tree_shape() {
  let points = vec![
    DVec3::splat(0.5),
    DVec3::new(1.5, 0.5, 0.5),
    DVec3::splat(3.5),
  ];
  let bounds = Aabb::new(DVec3::ZERO, DVec3::splat(4.0));
  let tree = Octree::build(&points, bounds, OctreeConfig::new(1.0, 1)).unwrap();
  let stats = tree.stats();

  assert_eq!(stats.total_nodes, 17);
  assert_eq!(stats.internal, 2);
  assert_eq!(stats.leaves, 15);
  assert_eq!(stats.occupied_leaves, 3);
  assert_eq!(stats.empty_leaves, 12);
  assert_eq!(stats.max_depth, 2);

  let occupied: Vec<(u32, DVec3)> = tree
    .occupied_leaves()
    .map(|leaf| (leaf.depth, tree.points_of(leaf)[0]))
    .collect();
  assert_eq!(
    occupied,
    vec![
      (2, DVec3::splat(0.5)),
      (2, DVec3::new(1.5, 0.5, 0.5)),
      (1, DVec3::splat(3.5)),
    ]
  );

  let root_children = tree.children_of(tree.root()).expect("root is internal");
  assert_eq!(root_children.len(), OCTANTS);
  assert_eq!(
    root_children[7].bounds,
    Aabb::new(DVec3::splat(2.0), DVec3::splat(4.0))
  );
}

/// Points outside caller-supplied bounds stay with the root but reach no leaf.
#[test]
fn test_points_outside_bounds_reach_no_child() {
  let points = vec![DVec3::splat(0.2), DVec3::splat(0.7), DVec3::splat(2.0)];
  let bounds = Aabb::new(DVec3::ZERO, DVec3::ONE);
  let tree = Octree::build(&points, bounds, OctreeConfig::new(0.1, 1)).unwrap();

  assert_eq!(tree.root().point_count(), 3);
  let in_children: usize = tree
    .children_of(tree.root())
    .unwrap()
    .iter()
    .map(OctreeNode::point_count)
    .sum();
  assert_eq!(in_children, 2);

  let in_leaves: usize = tree.leaves().map(OctreeNode::point_count).sum();
  assert_eq!(in_leaves, 2);
}

/// Flat data (zero z-extent) must not lose points on the collapsed axis.
#[test]
fn test_planar_cloud_keeps_every_point() {
  let points: Vec<DVec3> = (0..4)
    .flat_map(|x| (0..4).map(move |y| DVec3::new(x as f64, y as f64, 0.0)))
    .collect();
  let tree = Octree::from_points(&points, OctreeConfig::new(0.5, 1)).unwrap();
  let stats = tree.stats();

  let in_leaves: usize = tree.leaves().map(OctreeNode::point_count).sum();
  assert_eq!(in_leaves, points.len());
  assert_eq!(stats.occupied_leaves, points.len());
}

// =========================================================================
// Invariants on generated clouds
// =========================================================================

fn assert_tree_invariants(tree: &Octree) {
  let stats = tree.stats();
  assert_eq!(stats.total_nodes, stats.leaves + stats.internal);
  assert_eq!(stats.leaves, stats.occupied_leaves + stats.empty_leaves);
  assert_eq!(stats.total_nodes, tree.len());

  for node in tree.nodes() {
    match tree.children_of(node) {
      None => {
        for &point in tree.points_of(node) {
          assert!(
            node.bounds.contains_point(point),
            "leaf at depth {} does not contain {:?}",
            node.depth,
            point
          );
        }
      }
      Some(children) => {
        assert_eq!(children.len(), OCTANTS);
        let owned: usize = children.iter().map(OctreeNode::point_count).sum();
        assert_eq!(owned, node.point_count(), "children must own every parent point");
        let volume: f64 = children.iter().map(|c| c.bounds.volume()).sum();
        assert!((volume - node.bounds.volume()).abs() <= 1e-9 * node.bounds.volume().max(1.0));
        for child in children {
          assert_eq!(child.depth, node.depth + 1);
        }
      }
    }
  }

  let leaf_points: usize = tree.leaves().map(OctreeNode::point_count).sum();
  assert_eq!(leaf_points, tree.points().len());
}

#[test]
fn test_invariants_random_clouds() {
  for (seed, max_points, min_size) in [(1, 1, 0.5), (2, 8, 0.25), (3, 32, 1.0), (4, 4, 2.0)] {
    let points = random_cloud(seed, 1500, 10.0);
    let tree = Octree::from_points(&points, OctreeConfig::new(min_size, max_points)).unwrap();
    assert_tree_invariants(&tree);
  }
}

#[test]
fn test_invariants_clustered_cloud() {
  let points = clustered_cloud(11, 2000, 200);
  let tree = Octree::from_points(&points, OctreeConfig::new(0.05, 10)).unwrap();
  assert_tree_invariants(&tree);
  assert!(tree.stats().max_depth >= 4, "dense blob should drive deep subdivision");
}

/// Lattice points sit exactly on split planes at every level.
#[test]
fn test_invariants_lattice_on_split_planes() {
  let points = lattice(9, 0.5);
  let tree = Octree::from_points(&points, OctreeConfig::new(0.25, 1)).unwrap();
  assert_tree_invariants(&tree);
  assert_eq!(tree.stats().occupied_leaves, points.len());
}

#[test]
fn test_depth_bound_holds() {
  for (seed, min_size) in [(5, 0.3), (6, 0.01), (7, 1.7)] {
    let points = random_cloud(seed, 3000, 10.0);
    let config = OctreeConfig::new(min_size, 1);
    let tree = Octree::from_points(&points, config).unwrap();
    let bound = config.depth_bound(tree.bounds().max_extent());
    assert!(
      tree.stats().max_depth <= bound,
      "depth {} exceeds bound {}",
      tree.stats().max_depth,
      bound
    );
  }
}

/// `min_size` exactly `extent / 2^k` on bounds away from the origin, where
/// midpoints round and recomputed child extents can land a ulp above the half.
#[test]
fn test_depth_bound_holds_on_exact_ratios() {
  for (seed, offset, extent) in [(8, 0.1, 1.0), (9, -7.7, 3.0), (10, 1000.1, 0.7), (11, 0.3, 1.1)] {
    let points: Vec<DVec3> = random_cloud(seed, 400, extent)
      .into_iter()
      .map(|p| p + DVec3::splat(offset))
      .collect();
    let bounds = Aabb::from_points(&points).unwrap();
    let root_extent = bounds.max_extent();

    for k in 1..=6 {
      let config = OctreeConfig::new(root_extent / f64::powi(2.0, k), 1);
      let tree = Octree::build(&points, bounds, config).unwrap();
      let bound = config.depth_bound(root_extent);
      assert_eq!(bound, k as u32);
      assert!(
        tree.stats().max_depth <= bound,
        "offset {} k {}: depth {} exceeds bound {}",
        offset,
        k,
        tree.stats().max_depth,
        bound
      );
      assert_tree_invariants(&tree);
    }
  }
}

/// Stacked duplicates can never be separated; min_size ends the recursion.
#[test]
fn test_duplicates_terminate_at_min_size() {
  let mut points = vec![DVec3::splat(0.3); 50];
  points.push(DVec3::splat(1.0));
  points.push(DVec3::ZERO);
  let config = OctreeConfig::new(1e-3, 1);
  let tree = Octree::from_points(&points, config).unwrap();

  assert!(tree.stats().max_depth <= config.depth_bound(1.0));
  assert_tree_invariants(&tree);
}

/// Tiny min_size near float precision still terminates.
#[test]
fn test_tiny_min_size_terminates() {
  let points = vec![DVec3::splat(1.0); 3];
  let bounds = Aabb::new(DVec3::splat(1.0), DVec3::splat(1.0 + 1e-12));
  let tree = Octree::build(&points, bounds, OctreeConfig::new(f64::MIN_POSITIVE, 1)).unwrap();
  assert_tree_invariants(&tree);
}

// =========================================================================
// Idempotence and determinism
// =========================================================================

#[test]
fn test_stats_and_leaves_are_idempotent() {
  let points = random_cloud(21, 800, 5.0);
  let tree = Octree::from_points(&points, OctreeConfig::new(0.2, 6)).unwrap();

  assert_eq!(tree.stats(), tree.stats());
  let first: Vec<&OctreeNode> = tree.leaves().collect();
  let second: Vec<&OctreeNode> = tree.leaves().collect();
  assert_eq!(first, second);
}

#[test]
fn test_same_input_same_tree() {
  let points = random_cloud(22, 800, 5.0);
  let config = OctreeConfig::new(0.2, 6);
  let a = Octree::from_points(&points, config).unwrap();
  let b = Octree::from_points(&points, config).unwrap();

  assert_eq!(a.stats(), b.stats());
  let bounds_a: Vec<Aabb> = a.leaves().map(|leaf| leaf.bounds).collect();
  let bounds_b: Vec<Aabb> = b.leaves().map(|leaf| leaf.bounds).collect();
  assert_eq!(bounds_a, bounds_b);
}

#[test]
fn test_average_is_zero_without_occupied_leaves() {
  assert_eq!(OctreeStats::collect(std::iter::empty::<&OctreeNode>()).average_points_per_occupied_leaf, 0.0);
}
