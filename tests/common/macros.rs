/// Asserts that every agent of a population lies on the canvas.
#[macro_export]
macro_rules! assert_in_bounds {
    ($population:expr, $width:expr, $height:expr) => {
        for (i, agent) in $population.iter().enumerate() {
            assert!(
                agent.position.x >= 0.0 && agent.position.x <= $width,
                "Agent {} x={} outside [0, {}]",
                i,
                agent.position.x,
                $width
            );
            assert!(
                agent.position.y >= 0.0 && agent.position.y <= $height,
                "Agent {} y={} outside [0, {}]",
                i,
                agent.position.y,
                $height
            );
        }
    };
}

/// Asserts that a population has the given number of agents of each type.
#[macro_export]
macro_rules! assert_census {
    ($population:expr, $rock:expr, $paper:expr, $scissors:expr) => {
        let census = roshambo_lib::model::win::Census::of(&$population);
        assert_eq!(
            (census.rock, census.paper, census.scissors),
            ($rock, $paper, $scissors),
            "Census mismatch"
        );
    };
}
